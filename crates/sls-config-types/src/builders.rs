// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Helpers producing the free-form fragments of a config.

use sls_content::Content;

pub const DEFAULT_JWT_IDENTITY_SOURCE: &str = "$request.header.Authorization";

/// CloudFormation logical id of a service layer: `swift-lambda-runtime`
/// becomes `SwiftDashlambdaDashruntimeLambdaLayer`.
pub fn layer_logical_id(layer_name: &str) -> String {
    let mut chars = layer_name.chars();
    let head: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
    format!("{}{}LambdaLayer", head, chars.as_str().replace('-', "Dash"))
}

/// Function `layers` value referencing a service layer: `[{Ref: <logical id>}]`.
pub fn layers_ref(layer_name: &str) -> Content {
    Content::from_iter([Content::from_iter([("Ref", Content::from(layer_logical_id(layer_name)))])])
}

/// HTTP API JWT authorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtAuthorizer {
    pub identity_source: String,
    pub issuer_url: String,
    pub audience: Vec<String>,
}

impl JwtAuthorizer {
    pub fn new(issuer_url: impl Into<String>, audience: Vec<String>) -> Self {
        Self {
            identity_source: DEFAULT_JWT_IDENTITY_SOURCE.to_string(),
            issuer_url: issuer_url.into(),
            audience,
        }
    }
}

impl From<JwtAuthorizer> for Content {
    fn from(authorizer: JwtAuthorizer) -> Self {
        Content::from_iter([
            ("type", Content::from("jwt")),
            ("identitySource", Content::from(authorizer.identity_source)),
            ("issuerUrl", Content::from(authorizer.issuer_url)),
            ("audience", authorizer.audience.into_iter().map(Content::from).collect()),
        ])
    }
}

/// HTTP API Lambda (request) authorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAuthorizer {
    pub name: String,
    pub authorizer_type: String,
    pub function_name: String,
    pub payload_version: String,
    pub identity_source: Vec<String>,
    pub result_ttl_in_seconds: u32,
    pub enable_simple_responses: bool,
}

impl CustomAuthorizer {
    pub fn new(name: impl Into<String>, function_name: impl Into<String>, identity_source: Vec<String>) -> Self {
        Self {
            name: name.into(),
            authorizer_type: "request".to_string(),
            function_name: function_name.into(),
            payload_version: "2.0".to_string(),
            identity_source,
            result_ttl_in_seconds: 0,
            enable_simple_responses: true,
        }
    }
}

impl From<CustomAuthorizer> for Content {
    fn from(authorizer: CustomAuthorizer) -> Self {
        Content::from_iter([
            ("name", Content::from(authorizer.name)),
            ("type", Content::from(authorizer.authorizer_type)),
            ("functionName", Content::from(authorizer.function_name)),
            ("payloadVersion", Content::from(authorizer.payload_version)),
            (
                "identitySource",
                authorizer.identity_source.into_iter().map(Content::from).collect(),
            ),
            ("resultTtlInSeconds", Content::from(authorizer.result_ttl_in_seconds)),
            ("enableSimpleResponses", Content::from(authorizer.enable_simple_responses)),
        ])
    }
}
