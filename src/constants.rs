// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, also used as the tracing target prefix
pub const OPERATOR_NAME: &str = "internal-services";

/// InternalRequest API coordinates
pub mod api {
    pub const GROUP: &str = "appstudio.redhat.com";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "InternalRequest";
}

/// Reconcile loop timing
pub mod reconcile {
    /// Requeue delay used when an operation asks for a requeue without a delay
    pub const DEFAULT_REQUEUE_SECS: u64 = 5;
    /// First backoff delay in seconds after a failed reconcile
    pub const BACKOFF_BASE_SECS: u64 = 5;
    /// Backoff cap in seconds
    pub const BACKOFF_MAX_SECS: u64 = 300;
}

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
