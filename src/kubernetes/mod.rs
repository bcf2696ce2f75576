// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery and remote client creation.

pub mod client;
pub mod crd;

pub use client::create_remote_client;
pub use crd::wait_for_internal_request_crd;
