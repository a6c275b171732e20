// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! IAM permissions for the functions of a service.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sls_content::{sum_field, Content, Shape, SumField};
use std::collections::BTreeMap;
use strum::Display;

/// IAM role ARN.
pub type Arn = String;

/// `provider.iam`: either the ARN of an existing role or an inline role.
///
/// ```yaml
/// iam: arn:aws:iam::123456789012:role/execution
/// ---
/// iam:
///   role:
///     statements: [...]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Iam {
    ExistingRole(Arn),
    Role(Role),
}

impl SumField for Iam {
    type Scalar = Arn;
    type Structured = Role;

    const FIELD: &'static str = "iam";
    const KEY: &'static str = "role";

    fn from_shape(shape: Shape<Arn, Role>) -> Self {
        match shape {
            Shape::Scalar(arn) => Iam::ExistingRole(arn),
            Shape::Structured(role) => Iam::Role(role),
        }
    }

    fn as_shape(&self) -> Shape<&Arn, &Role> {
        match self {
            Iam::ExistingRole(arn) => Shape::Scalar(arn),
            Iam::Role(role) => Shape::Structured(role),
        }
    }
}

impl<'de> Deserialize<'de> for Iam {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        sum_field::deserialize(deserializer)
    }
}

impl Serialize for Iam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        sum_field::serialize(self, serializer)
    }
}

impl From<Role> for Iam {
    fn from(role: Role) -> Self {
        Iam::Role(role)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub statements: Vec<Statement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_role: Option<String>,
}

impl Role {
    pub fn with_statements(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Effect {
    Allow,
    Deny,
}

/// A single IAM policy statement.
///
/// `Resource` is free-form: a wildcard string, a list of ARNs or intrinsic
/// functions such as `Fn::GetAtt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: Effect,
    pub action: Vec<String>,
    pub resource: Content,
}

impl Statement {
    pub fn allow<I, S>(actions: I, resource: Content) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            effect: Effect::Allow,
            action: actions.into_iter().map(Into::into).collect(),
            resource,
        }
    }

    /// CloudWatch Logs write access for the function's log group.
    pub fn allow_log_access(resource: Content) -> Self {
        Self::allow(
            ["logs:CreateLogGroup", "logs:CreateLogStream", "logs:PutLogEvents"],
            resource,
        )
    }

    /// Item-level read/write access to a DynamoDB table.
    pub fn allow_dynamodb_read_write(resource: Content) -> Self {
        Self::allow(
            [
                "dynamodb:UpdateItem",
                "dynamodb:PutItem",
                "dynamodb:GetItem",
                "dynamodb:DeleteItem",
                "dynamodb:Query",
                "dynamodb:Scan",
                "dynamodb:DescribeTable",
            ],
            resource,
        )
    }
}
