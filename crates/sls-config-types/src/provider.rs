// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The `provider` section: deployment target and settings shared by all functions.

use crate::iam::Iam;
use crate::region::Region;
use serde::{Deserialize, Serialize};
use sls_content::{Content, DefaultFalse, DefaultFirstCase, DefaultTrue};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub name: CloudProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub region: DefaultFirstCase<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_method: Option<DeploymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_parameters: Option<Vec<StackParameter>>,
    #[serde(default)]
    pub disable_rollback: DefaultFalse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_configuration: Option<RollbackConfiguration>,

    // Defaults inherited by every function
    pub runtime: Runtime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_data_protection_policy: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    #[serde(default)]
    pub version_functions: DefaultTrue,
    #[serde(default)]
    pub architecture: DefaultFirstCase<Architecture>,

    /// API Gateway v2 HTTP API settings.
    #[serde(rename = "httpApi", skip_serializing_if = "Option::is_none")]
    pub http_api: Option<ProviderHttpApi>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam: Option<Iam>,
}

impl Provider {
    /// An AWS provider with every optional setting left unset.
    pub fn aws(region: Region, runtime: Runtime, architecture: Architecture) -> Self {
        Self {
            name: CloudProvider::Aws,
            stage: None,
            region: region.into(),
            profile: None,
            tags: None,
            stack_name: None,
            deployment_method: None,
            notification_arns: None,
            stack_parameters: None,
            disable_rollback: DefaultFalse::default(),
            rollback_configuration: None,
            runtime,
            memory_size: None,
            timeout: None,
            environment: None,
            log_retention_in_days: None,
            log_data_protection_policy: None,
            kms_key_arn: None,
            version_functions: DefaultTrue::default(),
            architecture: architecture.into(),
            http_api: None,
            iam: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CloudProvider {
    Aws,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeploymentMethod {
    Changesets,
    Direct,
}

/// CloudFormation stack parameter override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackParameter {
    pub parameter_key: String,
    pub parameter_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackConfiguration {
    pub monitoring_time_in_minutes: u32,
    pub rollback_triggers: Vec<RollbackTrigger>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RollbackTrigger {
    pub arn: String,
    #[serde(rename = "Type")]
    pub trigger_type: String,
}

/// Lambda runtime identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Runtime {
    #[serde(rename = "provided")]
    #[strum(serialize = "provided")]
    Provided,
    #[serde(rename = "provided.al2")]
    #[strum(serialize = "provided.al2")]
    ProvidedAl2,
    #[serde(rename = "provided.al2023")]
    #[strum(serialize = "provided.al2023")]
    ProvidedAl2023,
}

/// Instruction set architecture; `x86_64` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum Architecture {
    #[default]
    #[serde(rename = "x86_64")]
    #[strum(serialize = "x86_64")]
    X86_64,
    #[serde(rename = "arm64")]
    #[strum(serialize = "arm64")]
    Arm64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderHttpApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_default_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,
    /// Named authorizers, see [`crate::builders`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizers: Option<Content>,
}

impl ProviderHttpApi {
    pub fn new(payload: impl Into<String>, cors: bool) -> Self {
        Self {
            payload: Some(payload.into()),
            cors: Some(cors),
            ..Self::default()
        }
    }
}
