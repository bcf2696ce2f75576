// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered reconcile operations and the runner that drives them.

use crate::constants::reconcile::DEFAULT_REQUEUE_SECS;
use crate::error::Result;
use futures::future::BoxFuture;
use kube::runtime::controller::Action;
use std::time::Duration;
use tracing::{debug, trace};

/// Outcome of a single reconcile operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Run the next operation
    Continue,
    /// Skip the remaining operations and wait for the next change
    Stop,
    /// Skip the remaining operations and reconcile again later
    Requeue { after: Option<Duration> },
}

pub fn continue_processing() -> Result<OperationResult> {
    Ok(OperationResult::Continue)
}

pub fn stop_processing() -> Result<OperationResult> {
    Ok(OperationResult::Stop)
}

pub fn requeue() -> Result<OperationResult> {
    Ok(OperationResult::Requeue { after: None })
}

pub fn requeue_after(delay: Duration) -> Result<OperationResult> {
    Ok(OperationResult::Requeue { after: Some(delay) })
}

/// Propagate `outcome`'s error, otherwise continue
pub fn requeue_on_error_or_continue<T>(outcome: Result<T>) -> Result<OperationResult> {
    outcome.map(|_| OperationResult::Continue)
}

/// Propagate `outcome`'s error, otherwise stop
pub fn requeue_on_error_or_stop<T>(outcome: Result<T>) -> Result<OperationResult> {
    outcome.map(|_| OperationResult::Stop)
}

/// A named reconcile step executed against a per-invocation target
pub trait ReconcileOperation<T: ?Sized>: Send + Sync {
    fn name(&self) -> &'static str;

    fn run<'a>(&'a self, target: &'a T) -> BoxFuture<'a, Result<OperationResult>>;
}

/// Run `operations` in order against `target`.
///
/// The first operation that errors, stops or requeues ends the run.
/// Errors are returned unchanged so the controller's error policy decides
/// on the retry.
pub async fn reconcile_handler<T>(
    target: &T,
    operations: &[&dyn ReconcileOperation<T>],
) -> Result<Action>
where
    T: ?Sized + Sync,
{
    for operation in operations {
        trace!(operation = operation.name(), "Running reconcile operation");

        match operation.run(target).await? {
            OperationResult::Continue => continue,
            OperationResult::Stop => {
                debug!(operation = operation.name(), "Operation stopped processing");
                return Ok(Action::await_change());
            }
            OperationResult::Requeue { after } => {
                let delay = after.unwrap_or(Duration::from_secs(DEFAULT_REQUEUE_SECS));
                debug!(
                    operation = operation.name(),
                    delay_secs = delay.as_secs(),
                    "Operation requested requeue"
                );
                return Ok(Action::requeue(delay));
            }
        }
    }

    Ok(Action::await_change())
}
