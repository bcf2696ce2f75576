// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetch-then-run reconcile logic for InternalRequest, independent of the
//! watch machinery so it can be driven directly in tests.

use super::adapter::{Adapter, EnsureReconcileOperationIsLogged};
use crate::error::Result;
use crate::reconcilers::operation::{reconcile_handler, ReconcileOperation};
use crate::types::InternalRequest;
use kube::runtime::controller::Action;
use kube::runtime::reflector::{ObjectRef, Store};
use kube::{Api, Client};
use std::future::Future;
use std::sync::Arc;
use tracing::{info_span, instrument};

/// Looks up an InternalRequest by namespace and name.
/// `Ok(None)` means the object does not exist.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Arc<InternalRequest>>>> + Send;
}

/// Reads straight from the API server
#[derive(Clone)]
pub struct ApiFetcher {
    client: Client,
}

impl ApiFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ResourceFetcher for ApiFetcher {
    async fn fetch(&self, namespace: &str, name: &str) -> Result<Option<Arc<InternalRequest>>> {
        let api: Api<InternalRequest> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.get_opt(name).await?.map(Arc::new))
    }
}

/// Reads from the controller's informer cache
impl ResourceFetcher for Store<InternalRequest> {
    async fn fetch(&self, namespace: &str, name: &str) -> Result<Option<Arc<InternalRequest>>> {
        Ok(self.get(&ObjectRef::new(name).within(namespace)))
    }
}

/// Reconciles InternalRequest objects
pub struct Reconciler<F> {
    fetcher: F,
    client: Client,
}

impl<F: ResourceFetcher> Reconciler<F> {
    /// `client` is handed to every Adapter; `fetcher` resolves the watched object.
    pub fn new(fetcher: F, client: Client) -> Self {
        Self { fetcher, client }
    }

    #[instrument(skip(self), fields(internal_request = %format!("{}/{}", namespace, name)))]
    pub async fn reconcile(&self, namespace: &str, name: &str) -> Result<Action> {
        let Some(internal_request) = self.fetcher.fetch(namespace, name).await? else {
            return Ok(Action::await_change());
        };

        let span = info_span!(
            "internal_request",
            internal_request = %internal_request.namespaced_name()
        );
        let adapter = Adapter::new(internal_request, span, self.client.clone());

        let operations: [&dyn ReconcileOperation<Adapter>; 1] = [&EnsureReconcileOperationIsLogged];
        reconcile_handler(&adapter, &operations).await
    }
}
