// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! CloudFormation resources declared under `resources.Resources`.

use serde::{Deserialize, Serialize};
use sls_content::Content;
use std::collections::BTreeMap;

pub const DYNAMODB_TABLE: &str = "AWS::DynamoDB::Table";

/// A CloudFormation resource with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    pub properties: Content,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, properties: Content) -> Self {
        Self {
            resource_type: resource_type.into(),
            properties,
        }
    }

    /// On-demand DynamoDB table with a single string `HASH` key.
    pub fn dynamodb_table(table_name: &str, key: &str) -> Self {
        let properties = Content::from_iter([
            ("TableName", Content::from(table_name)),
            (
                "AttributeDefinitions",
                Content::from_iter([Content::from_iter([
                    ("AttributeName", Content::from(key)),
                    ("AttributeType", Content::from("S")),
                ])]),
            ),
            (
                "KeySchema",
                Content::from_iter([Content::from_iter([
                    ("AttributeName", Content::from(key)),
                    ("KeyType", Content::from("HASH")),
                ])]),
            ),
            ("BillingMode", Content::from("PAY_PER_REQUEST")),
        ]);
        Self::new(DYNAMODB_TABLE, properties)
    }
}

/// The `resources` section wrapper: `{Resources: {<logical id>: Resource}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resources {
    pub resources: BTreeMap<String, Resource>,
}

impl Resources {
    pub fn with(resources: impl IntoIterator<Item = (String, Resource)>) -> Self {
        Self {
            resources: resources.into_iter().collect(),
        }
    }

    /// Convert to the untyped form stored in [`crate::ServerlessConfig::resources`].
    pub fn to_content(&self) -> sls_content::Result<Content> {
        Content::from_native(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_dynamodb_table_properties() {
        let table = Resource::dynamodb_table("${self:custom.tableName}", "${self:custom.keyName}");
        assert_eq!(table.resource_type, "AWS::DynamoDB::Table");
        assert_eq!(
            table.properties.native_value(),
            json!({
                "TableName": "${self:custom.tableName}",
                "AttributeDefinitions": [
                    {"AttributeName": "${self:custom.keyName}", "AttributeType": "S"}
                ],
                "KeySchema": [
                    {"AttributeName": "${self:custom.keyName}", "KeyType": "HASH"}
                ],
                "BillingMode": "PAY_PER_REQUEST",
            })
        );
    }

    #[test]
    fn test_resources_to_content() {
        let resources = Resources::with([("ProductsTable".to_string(), Resource::dynamodb_table("t", "sku"))]);
        let content = resources.to_content().unwrap();
        let table = content.get("Resources").and_then(|r| r.get("ProductsTable")).unwrap();
        assert_eq!(table.get("Type"), Some(&Content::from("AWS::DynamoDB::Table")));
        assert_eq!(
            table.get("Properties").and_then(|p| p.get("BillingMode")),
            Some(&Content::from("PAY_PER_REQUEST"))
        );

        let back: Resources = content.deserialize_into().unwrap();
        assert_eq!(back, resources);
    }
}
