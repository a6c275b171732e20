// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Programmatic counterparts of the YAML fixtures.

#![allow(dead_code)]

use sls_config_types::{
    CustomAuthorizer, EventHttpApi, Function, HttpApiLambda, HttpMethod, Iam, JwtAuthorizer, Layer, Package,
    Provider, ProviderHttpApi, Resource, Resources, Result, Role, ServerlessConfig, Statement,
};
use sls_content::Content;
use std::collections::BTreeMap;

pub use sls_config_types::{Architecture, Region, Runtime};

pub const SERVERLESS_YML: &str = include_str!("../fixtures/serverless.yml");
pub const SERVERLESS_NO_LAYER_YML: &str = include_str!("../fixtures/serverless_no_layer.yml");
pub const SERVERLESS_WEBHOOK_YML: &str = include_str!("../fixtures/serverless_webhook.yml");

pub const LAYER_KEY: &str = "swift-lambda-runtime";

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sls_config_types=debug,sls_content=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Shared shape of the DynamoDB-backed REST API services.
pub struct RestApi<'a> {
    pub service: &'a str,
    pub dynamodb_key: &'a str,
    pub table_name_prefix: &'a str,
    pub http_api_path: &'a str,
    pub region: Region,
    pub runtime: Runtime,
    pub architecture: Architecture,
    pub memory_size: u32,
    pub executable: &'a str,
}

pub struct LayerParams<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub path: &'a str,
    pub build_path: &'a str,
}

pub struct WebhookLambda<'a> {
    pub name: &'a str,
    pub handler: &'a str,
    pub event: EventHttpApi,
    pub environment: Option<Content>,
    pub artifact: &'a str,
}

pub fn products_api() -> RestApi<'static> {
    RestApi {
        service: "swift-serverless-rest-api",
        dynamodb_key: "sku",
        table_name_prefix: "products",
        http_api_path: "/products",
        region: Region::EuWest1,
        runtime: Runtime::ProvidedAl2,
        architecture: Architecture::Arm64,
        memory_size: 256,
        executable: "Products",
    }
}

fn endpoints(api: &RestApi<'_>) -> Vec<(&'static str, HttpMethod, String)> {
    let keyed_path = format!("{}/{{{}}}", api.http_api_path, api.dynamodb_key);
    vec![
        ("create", HttpMethod::Post, api.http_api_path.to_string()),
        ("read", HttpMethod::Get, keyed_path.clone()),
        ("update", HttpMethod::Put, api.http_api_path.to_string()),
        ("delete", HttpMethod::Delete, keyed_path),
        ("list", HttpMethod::Get, api.http_api_path.to_string()),
    ]
}

fn table_access_role(table: &str) -> Iam {
    let table_arn = Content::from_iter([Content::from_iter([(
        "Fn::GetAtt",
        Content::from_iter([Content::from(table), Content::from("Arn")]),
    )])]);
    Iam::Role(Role::with_statements(vec![
        Statement::allow_log_access(Content::from("*")),
        Statement::allow_dynamodb_read_write(table_arn),
    ]))
}

fn table_environment() -> Content {
    Content::from_iter([
        ("DYNAMO_DB_TABLE_NAME", Content::from("${self:custom.tableName}")),
        ("DYNAMO_DB_KEY", Content::from("${self:custom.keyName}")),
    ])
}

fn table_custom(api: &RestApi<'_>) -> Content {
    Content::from_iter([
        ("tableName", Content::from(format!("{}-table-${{sls:stage}}", api.table_name_prefix))),
        ("keyName", Content::from(api.dynamodb_key)),
    ])
}

fn table_resources(table: &str) -> Result<Content> {
    let table_resource = Resource::dynamodb_table("${self:custom.tableName}", "${self:custom.keyName}");
    Ok(Resources::with([(table.to_string(), table_resource)]).to_content()?)
}

pub fn dynamodb_lambda_api_with_layer(api: &RestApi<'_>, layer: &LayerParams<'_>) -> Result<ServerlessConfig> {
    let table = "ProductsTable";

    let mut provider = Provider::aws(api.region, api.runtime, api.architecture);
    provider.environment = Some(table_environment());
    provider.http_api = Some(ProviderHttpApi::new("2.0", true));
    provider.iam = Some(table_access_role(table));

    let package = Package {
        patterns: Some(vec![
            "!**/*".to_string(),
            format!("{}/{}", layer.build_path, api.executable),
        ]),
        individually: Some(true),
        artifact: None,
    };

    let functions = endpoints(api)
        .into_iter()
        .map(|(handler, method, path)| {
            let function = Function::http_api_lambda(HttpApiLambda {
                handler: format!("{}/{}.{}", layer.build_path, api.executable, handler),
                event: EventHttpApi::new(method, path),
                memory_size: Some(api.memory_size),
                package: Some(package.clone()),
                layer: Some(LAYER_KEY.to_string()),
                ..HttpApiLambda::default()
            });
            (format!("{}{}", handler, api.executable), function)
        })
        .collect();

    let mut config = ServerlessConfig::new(api.service, provider);
    config.package = Some(Package::individually());
    config.custom = Some(table_custom(api));
    config.layers = Some(BTreeMap::from([(
        LAYER_KEY.to_string(),
        Layer {
            path: layer.path.to_string(),
            name: layer.name.to_string(),
            description: layer.description.to_string(),
        },
    )]));
    config.functions = Some(functions);
    config.resources = Some(table_resources(table)?);
    Ok(config)
}

pub fn dynamodb_lambda_api(api: &RestApi<'_>, artifact: &str) -> Result<ServerlessConfig> {
    let table = format!("{}Table", api.executable);

    let authorizers = Content::from_iter([
        (
            "JWTAuthorizer",
            Content::from(JwtAuthorizer::new(
                "https://appleid.apple.com",
                vec!["com.mydomain.myhost".to_string()],
            )),
        ),
        (
            "customAuthorizer",
            Content::from(CustomAuthorizer::new(
                "LambdaAuthorizer",
                "lambdaAuthorizer",
                vec![
                    "$request.header.SEC-X-API-KEY".to_string(),
                    "$request.header.User-Agent".to_string(),
                ],
            )),
        ),
    ]);

    let mut provider = Provider::aws(api.region, api.runtime, api.architecture);
    provider.environment = Some(table_environment());
    provider.http_api = Some(ProviderHttpApi {
        authorizers: Some(authorizers),
        ..ProviderHttpApi::new("2.0", true)
    });
    provider.iam = Some(table_access_role(&table));

    let functions = endpoints(api)
        .into_iter()
        .map(|(handler, method, path)| {
            let function = Function::http_api_lambda(HttpApiLambda {
                handler: handler.to_string(),
                event: EventHttpApi::new(method, path),
                memory_size: Some(api.memory_size),
                ..HttpApiLambda::default()
            });
            (format!("{}{}", handler, api.executable), function)
        })
        .collect();

    let mut config = ServerlessConfig::new(api.service, provider);
    config.package = Some(Package::artifact(artifact));
    config.custom = Some(table_custom(api));
    config.functions = Some(functions);
    config.resources = Some(table_resources(&table)?);
    Ok(config)
}

pub fn webhook_lambda_api(
    service: &str,
    region: Region,
    runtime: Runtime,
    architecture: Architecture,
    memory_size: u32,
    lambdas: Vec<WebhookLambda<'_>>,
) -> ServerlessConfig {
    let mut provider = Provider::aws(region, runtime, architecture);
    provider.http_api = Some(ProviderHttpApi::new("2.0", false));
    provider.iam = Some(Iam::Role(Role::with_statements(vec![Statement::allow_log_access(
        Content::from("*"),
    )])));

    let functions = lambdas
        .into_iter()
        .map(|lambda| {
            let function = Function::http_api_lambda(HttpApiLambda {
                handler: lambda.handler.to_string(),
                event: lambda.event,
                memory_size: Some(memory_size),
                environment: lambda.environment,
                package: Some(Package::artifact(lambda.artifact)),
                ..HttpApiLambda::default()
            });
            (lambda.name.to_string(), function)
        })
        .collect();

    let mut config = ServerlessConfig::new(service, provider);
    config.package = Some(Package::individually());
    config.functions = Some(functions);
    config
}
