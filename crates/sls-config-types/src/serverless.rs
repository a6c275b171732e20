// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The root `serverless.yml` document.

use crate::error::{ConfigError, Result};
use crate::function::{Function, Layer};
use crate::package::Package;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use sls_content::{Content, DefaultFalse};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};
use tracing::debug;

pub const DEFAULT_FRAMEWORK_VERSION: &str = "3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessConfig {
    pub service: String,
    pub framework_version: String,
    pub config_validation_mode: ValidationMode,
    #[serde(default)]
    pub use_dotenv: DefaultFalse,
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
    /// User-defined variables referenced as `${self:custom.*}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<BTreeMap<String, Layer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<BTreeMap<String, Function>>,
    /// Raw CloudFormation, see [`crate::Resources`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Content>,
}

/// How the framework reacts to configuration validation problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValidationMode {
    Error,
    #[default]
    Warn,
    Off,
}

impl ServerlessConfig {
    /// A config for framework version 3 in `warn` validation mode with no
    /// optional sections.
    pub fn new(service: impl Into<String>, provider: Provider) -> Self {
        Self {
            service: service.into(),
            framework_version: DEFAULT_FRAMEWORK_VERSION.to_string(),
            config_validation_mode: ValidationMode::default(),
            use_dotenv: DefaultFalse::default(),
            provider,
            package: None,
            custom: None,
            layers: None,
            functions: None,
            resources: None,
        }
    }

    /// Parse a `serverless.yml` document.
    ///
    /// Failures report the path of the offending node, e.g.
    /// `provider.iam` or `functions.create.events[0].httpApi.method`.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(text);
        let config: Self = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            ConfigError::Decode {
                path,
                source: err.into_inner(),
            }
        })?;
        debug!(
            service = %config.service,
            functions = config.function_count(),
            "Decoded serverless config"
        );
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        let text = serde_yaml::to_string(self).map_err(ConfigError::Encode)?;
        debug!(
            service = %self.service,
            functions = self.function_count(),
            bytes = text.len(),
            "Encoded serverless config"
        );
        Ok(text)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.as_ref().and_then(|functions| functions.get(name))
    }

    pub fn function_count(&self) -> usize {
        self.functions.as_ref().map_or(0, BTreeMap::len)
    }
}
