// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Lambda functions, their events and layers.

use crate::builders::layers_ref;
use crate::package::Package;
use crate::provider::{Architecture, Runtime};
use serde::{Deserialize, Serialize};
use sls_content::Content;
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    /// Container image URI, mutually exclusive with `handler` at deploy time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_concurrency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_concurrency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_logs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_retention_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
    /// Layer references, usually `[{Ref: <Name>LambdaLayer}]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Tracing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_config: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_retry_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_event_age: Option<u32>,
    pub events: Vec<FunctionEvent>,
}

/// Parameters for [`Function::http_api_lambda`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpApiLambda {
    pub handler: String,
    pub event: EventHttpApi,
    /// Defaults to `[${sls:stage}] <method> <path>`.
    pub description: Option<String>,
    pub memory_size: Option<u32>,
    pub runtime: Option<Runtime>,
    pub environment: Option<Content>,
    pub package: Option<Package>,
    /// Key of a layer declared in the service `layers` section.
    pub layer: Option<String>,
}

impl Function {
    /// A function behind a single HTTP API route.
    pub fn http_api_lambda(params: HttpApiLambda) -> Self {
        let description = params
            .description
            .unwrap_or_else(|| format!("[${{sls:stage}}] {} {}", params.event.method, params.event.path));
        Self {
            handler: Some(params.handler),
            runtime: params.runtime,
            memory_size: params.memory_size,
            environment: params.environment,
            description,
            package: params.package,
            layers: params.layer.as_deref().map(layers_ref),
            events: vec![FunctionEvent::http_api(params.event)],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionEvent {
    #[serde(rename = "httpApi", skip_serializing_if = "Option::is_none")]
    pub http_api: Option<EventHttpApi>,
}

impl FunctionEvent {
    pub fn http_api(event: EventHttpApi) -> Self {
        Self { http_api: Some(event) }
    }
}

/// An API Gateway v2 route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventHttpApi {
    pub path: String,
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<Content>,
}

impl EventHttpApi {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            authorizer: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Tracing {
    Active,
    PassThrough,
}

/// A Lambda layer declared at service level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub path: String,
    pub name: String,
    pub description: String,
}
