// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the InternalRequest CRD as YAML.

use internal_services::types::InternalRequest;
use kube::CustomResourceExt;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&InternalRequest::crd())?);
    Ok(())
}
