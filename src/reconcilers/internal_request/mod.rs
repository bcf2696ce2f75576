// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! InternalRequest controller - watches InternalRequests on the remote cluster
//! and runs the reconcile operations for every change.

pub mod adapter;
pub mod reconciler;

pub use adapter::Adapter;
pub use reconciler::{ApiFetcher, Reconciler, ResourceFetcher};

use crate::config::Config;
use crate::error::{InternalServicesError, Result};
use crate::reconcilers::retry::{compute_backoff, ErrorKind, RetryTracker};
use crate::types::InternalRequest;
use futures::StreamExt;
use kube::{
    runtime::{
        controller::{Action, Error as ControllerError},
        reflector::{ObjectRef, Store},
        watcher, Controller,
    },
    Api, Client, ResourceExt,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct InternalRequestController {
    remote_client: Client,
    local_client: Client,
    config: Config,
}

/// Shared state handed to every reconcile call
pub struct Context {
    store: Store<InternalRequest>,
    reconciler: Reconciler<Store<InternalRequest>>,
    retries: RetryTracker,
}

impl Context {
    fn new(store: Store<InternalRequest>, local_client: Client) -> Self {
        Self {
            reconciler: Reconciler::new(store.clone(), local_client),
            store,
            retries: RetryTracker::new(),
        }
    }

    /// Forget failure counts of objects that left the cache
    fn prune_retries(&self) {
        let active: Vec<String> = self.store.state().iter().map(|ir| object_key(ir)).collect();
        self.retries.cleanup(&active);
    }
}

impl InternalRequestController {
    /// `remote_client` is the cluster whose InternalRequests are watched,
    /// `local_client` is the one handed to adapters.
    pub fn new(remote_client: Client, local_client: Client, config: Config) -> Self {
        Self {
            remote_client,
            local_client,
            config,
        }
    }

    fn api(&self) -> Api<InternalRequest> {
        match &self.config.watch_namespace {
            Some(namespace) => Api::namespaced(self.remote_client.clone(), namespace),
            None => Api::all(self.remote_client.clone()),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let controller = Controller::new(self.api(), watcher::Config::default());
        let context = Arc::new(Context::new(controller.store(), self.local_client));

        info!(
            namespace = self.config.watch_namespace.as_deref().unwrap_or("<all>"),
            "Watching InternalRequests"
        );

        controller
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| async move { log_controller_result(res) })
            .await;

        Ok(())
    }
}

type ControllerResult = std::result::Result<
    (ObjectRef<InternalRequest>, Action),
    ControllerError<InternalServicesError, watcher::Error>,
>;

fn log_controller_result(res: ControllerResult) {
    match res {
        Ok(o) => debug!("Reconciled internal request: {:?}", o),
        // already logged by error_policy
        Err(ControllerError::ReconcilerFailed(..)) => {}
        Err(e) => warn!("Controller error: {:?}", e),
    }
}

/// Retry key: the UID, so a recreated object starts from zero
fn object_key(internal_request: &InternalRequest) -> String {
    internal_request
        .uid()
        .unwrap_or_else(|| internal_request.namespaced_name())
}

async fn reconcile(internal_request: Arc<InternalRequest>, ctx: Arc<Context>) -> Result<Action> {
    let namespace = internal_request.namespace().ok_or_else(|| {
        InternalServicesError::InvalidResource(format!(
            "InternalRequest {} has no namespace",
            internal_request.name_any()
        ))
    })?;
    let name = internal_request.name_any();

    let action = ctx.reconciler.reconcile(&namespace, &name).await?;
    ctx.retries.reset(&object_key(&internal_request));
    ctx.prune_retries();

    Ok(action)
}

fn error_policy(
    internal_request: Arc<InternalRequest>,
    error: &InternalServicesError,
    ctx: Arc<Context>,
) -> Action {
    ctx.prune_retries();
    let attempt = ctx.retries.increment(&object_key(&internal_request));
    error!(
        internal_request = %internal_request.namespaced_name(),
        attempt,
        "Reconciliation error: {}",
        error
    );
    compute_backoff(attempt, ErrorKind::from(error))
}
