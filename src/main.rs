// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use internal_services::config::Config;
use internal_services::constants::OPERATOR_NAME;
use internal_services::kubernetes::{create_remote_client, wait_for_internal_request_crd};
use internal_services::reconcilers::InternalRequestController;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting {} operator", OPERATOR_NAME);

    let config = Config::from_env()?;
    info!(
        remote_kubeconfig = ?config.remote_kubeconfig,
        watch_namespace = ?config.watch_namespace,
        "Configuration loaded"
    );

    let local_client = Client::try_default()
        .await
        .context("Failed to create local Kubernetes client")?;
    let remote_client = create_remote_client(&local_client, &config)
        .await
        .context("Failed to create remote Kubernetes client")?;
    info!("Connected to Kubernetes clusters");

    if config.wait_for_crd {
        info!("Waiting for InternalRequest CRD to become available...");
        wait_for_internal_request_crd(&remote_client).await?;
    }

    InternalRequestController::new(remote_client, local_client, config)
        .run()
        .await?;

    warn!("InternalRequest controller stopped");
    Ok(())
}
