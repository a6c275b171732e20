// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Strongly-typed records for `serverless.yml` (framework version 3, AWS).
//!
//! Sections the framework leaves open (`custom`, `resources`, environment
//! maps, authorizers, intrinsic functions inside IAM statements) are kept as
//! [`sls_content::Content`] so a document round-trips without losing data.
//!
//! ```
//! use sls_config_types::ServerlessConfig;
//!
//! let config = ServerlessConfig::from_yaml_str(
//!     "service: api\nframeworkVersion: '3'\nconfigValidationMode: warn\n\
//!      provider: {name: aws, runtime: provided.al2}\n",
//! )
//! .unwrap();
//! assert_eq!(config.provider.region.to_string(), "us-east-1");
//! ```

pub mod builders;
pub mod error;
pub mod function;
pub mod iam;
pub mod package;
pub mod provider;
pub mod region;
pub mod resource;
pub mod serverless;

pub use builders::{layers_ref, CustomAuthorizer, JwtAuthorizer};
pub use error::{ConfigError, Result};
pub use function::{EventHttpApi, Function, FunctionEvent, HttpApiLambda, HttpMethod, Layer, Tracing};
pub use iam::{Arn, Effect, Iam, Role, Statement};
pub use package::Package;
pub use provider::{
    Architecture, CloudProvider, DeploymentMethod, Provider, ProviderHttpApi, RollbackConfiguration,
    RollbackTrigger, Runtime, StackParameter, Stage,
};
pub use region::Region;
pub use resource::{Resource, Resources};
pub use serverless::{ServerlessConfig, ValidationMode};
