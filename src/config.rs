// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig of the cluster whose InternalRequests are watched.
    /// When unset the default client is used for both clusters.
    pub remote_kubeconfig: Option<PathBuf>,
    /// Restrict the watch to a single namespace
    pub watch_namespace: Option<String>,
    pub wait_for_crd: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let remote_kubeconfig = non_empty("REMOTE_KUBECONFIG").map(PathBuf::from);
        let watch_namespace = non_empty("WATCH_NAMESPACE");
        let wait_for_crd = match non_empty("WAIT_FOR_CRD") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("WAIT_FOR_CRD must be true or false, got '{}'", v))?,
            None => true,
        };

        Ok(Config {
            remote_kubeconfig,
            watch_namespace,
            wait_for_crd,
        })
    }
}
