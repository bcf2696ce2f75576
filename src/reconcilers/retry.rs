// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-object exponential backoff for failed reconciles.

use crate::constants::reconcile::{BACKOFF_BASE_SECS, BACKOFF_MAX_SECS};
use crate::error::InternalServicesError;
use kube::runtime::controller::Action;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

/// Consecutive failure counts keyed by object UID
#[derive(Debug, Default)]
pub struct RetryTracker {
    attempts: Mutex<HashMap<String, u32>>,
}

impl RetryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `key` and return the new count
    pub fn increment(&self, key: &str) -> u32 {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let count = attempts.entry(key.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Forget failures for `key` (successful reconcile or object gone)
    pub fn reset(&self, key: &str) {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.remove(key);
    }

    pub fn get(&self, key: &str) -> u32 {
        let attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.get(key).copied().unwrap_or(0)
    }

    /// Drop entries for objects that no longer exist
    pub fn cleanup(&self, active_keys: &[String]) {
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.retain(|key, _| active_keys.contains(key));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// API or network failures; retried with backoff
    Transient,
    /// Needs operator intervention; retried only on the next change
    Permanent,
}

impl From<&InternalServicesError> for ErrorKind {
    fn from(error: &InternalServicesError) -> Self {
        match error {
            InternalServicesError::KubeError(_) => ErrorKind::Transient,
            InternalServicesError::KubeconfigError(_)
            | InternalServicesError::ConfigError(_)
            | InternalServicesError::InvalidResource(_) => ErrorKind::Permanent,
        }
    }
}

/// Backoff for the `attempt`-th consecutive failure: base * 2^(attempt-1), capped
pub fn compute_backoff(attempt: u32, kind: ErrorKind) -> Action {
    match kind {
        ErrorKind::Transient => {
            let exponent = attempt.saturating_sub(1).min(32);
            let delay_secs = BACKOFF_BASE_SECS
                .saturating_mul(2u64.saturating_pow(exponent))
                .min(BACKOFF_MAX_SECS);
            debug!(attempt, delay_secs, "Scheduling retry with exponential backoff");
            Action::requeue(Duration::from_secs(delay_secs))
        }
        ErrorKind::Permanent => {
            warn!("Permanent error, waiting for resource change");
            Action::await_change()
        }
    }
}
