// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reconcilers that react to watch events.

pub mod internal_request;
pub mod operation;
pub mod retry;

pub use internal_request::InternalRequestController;
pub use operation::{OperationResult, ReconcileOperation};
