// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InternalServicesError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid InternalRequest: {0}")]
    InvalidResource(String),
}

impl InternalServicesError {
    /// HTTP status code of the underlying API error, if any
    pub fn api_code(&self) -> Option<u16> {
        match self {
            InternalServicesError::KubeError(kube::Error::Api(resp)) => Some(resp.code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InternalServicesError>;
