// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Remote cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{InternalServicesError, Result};
use kube::{config::KubeConfigOptions, Client};
use std::path::Path;
use tracing::{info, instrument};

/// Create the client for the cluster whose InternalRequests are watched.
/// Falls back to `local_client` when no remote kubeconfig is configured.
pub async fn create_remote_client(local_client: &Client, config: &Config) -> Result<Client> {
    match &config.remote_kubeconfig {
        Some(path) => create_client_from_path(path).await,
        None => {
            info!("No remote kubeconfig configured, watching the local cluster");
            Ok(local_client.clone())
        }
    }
}

#[instrument]
async fn create_client_from_path(path: &Path) -> Result<Client> {
    info!("Loading remote kubeconfig");

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        InternalServicesError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    create_client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
        InternalServicesError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e))
    })?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                InternalServicesError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config).map_err(|e| {
        InternalServicesError::KubeconfigError(format!("Failed to create client: {}", e))
    })
}
