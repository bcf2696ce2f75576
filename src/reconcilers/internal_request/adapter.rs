// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-invocation state and the operations run against an InternalRequest.

use crate::error::Result;
use crate::reconcilers::operation::{continue_processing, OperationResult, ReconcileOperation};
use crate::types::InternalRequest;
use futures::future::BoxFuture;
use kube::Client;
use std::sync::Arc;
use tracing::{info, Span};

/// Holds the objects needed to reconcile one InternalRequest.
/// Built fresh for every reconcile call.
pub struct Adapter {
    internal_request: Arc<InternalRequest>,
    span: Span,
    // unused until an operation writes to the cluster
    #[allow(dead_code)]
    client: Client,
}

impl Adapter {
    pub fn new(internal_request: Arc<InternalRequest>, span: Span, client: Client) -> Self {
        Self {
            internal_request,
            span,
            client,
        }
    }

    pub async fn ensure_reconcile_operation_is_logged(&self) -> Result<OperationResult> {
        info!(
            parent: &self.span,
            request = %self.internal_request.spec.request,
            "InternalRequest successfully watched"
        );

        continue_processing()
    }
}

pub struct EnsureReconcileOperationIsLogged;

impl ReconcileOperation<Adapter> for EnsureReconcileOperationIsLogged {
    fn name(&self) -> &'static str {
        "EnsureReconcileOperationIsLogged"
    }

    fn run<'a>(&'a self, adapter: &'a Adapter) -> BoxFuture<'a, Result<OperationResult>> {
        Box::pin(adapter.ensure_reconcile_operation_is_logged())
    }
}
