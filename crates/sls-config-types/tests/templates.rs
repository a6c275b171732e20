// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

mod support;

use pretty_assertions::assert_eq;
use sls_config_types::{EventHttpApi, HttpMethod, ServerlessConfig};
use sls_content::Content;
use support::{
    Architecture, LayerParams, Region, Runtime, WebhookLambda, SERVERLESS_NO_LAYER_YML, SERVERLESS_WEBHOOK_YML,
    SERVERLESS_YML,
};

const FUNCTIONS: [&str; 5] = ["createProducts", "readProducts", "updateProducts", "deleteProducts", "listProducts"];

#[test]
fn test_init_serverless_yml() {
    support::init_tracing();
    let decoded = ServerlessConfig::from_yaml_str(SERVERLESS_YML).unwrap();
    let built = support::dynamodb_lambda_api_with_layer(
        &support::products_api(),
        &LayerParams {
            name: "aws-swift-serverless-lambda-runtime",
            description: "AWS Lambda Custom Runtime for swift-serverless",
            path: "./build/swift-lambda-runtime",
            build_path: "build",
        },
    )
    .unwrap();

    assert_eq!(built.service, decoded.service);
    assert_eq!(built.provider.iam, decoded.provider.iam);
    assert_eq!(built.provider, decoded.provider);
    assert_eq!(built.package, decoded.package);
    assert_eq!(built.custom, decoded.custom);
    assert_eq!(built.layers, decoded.layers);
    for name in FUNCTIONS {
        assert_eq!(built.function(name), decoded.function(name), "function {name}");
    }
    assert_eq!(built.resources, decoded.resources);
    assert_eq!(built, decoded);
}

#[test]
fn test_init_serverless_no_layer_yml() {
    let decoded = ServerlessConfig::from_yaml_str(SERVERLESS_NO_LAYER_YML).unwrap();
    let built = support::dynamodb_lambda_api(&support::products_api(), "build/Products/Products.zip").unwrap();

    assert_eq!(built.provider.http_api, decoded.provider.http_api);
    assert_eq!(built.provider, decoded.provider);
    assert_eq!(built.package, decoded.package);
    for name in FUNCTIONS {
        assert_eq!(built.function(name), decoded.function(name), "function {name}");
    }
    assert_eq!(built.resources, decoded.resources);
    assert_eq!(built, decoded);
}

#[test]
fn test_init_serverless_webhook_yml() {
    let decoded = ServerlessConfig::from_yaml_str(SERVERLESS_WEBHOOK_YML).unwrap();
    let built = support::webhook_lambda_api(
        "swift-webhook",
        Region::UsEast1,
        Runtime::ProvidedAl2,
        Architecture::Arm64,
        256,
        vec![
            WebhookLambda {
                name: "postWebHook",
                handler: "post-webhook",
                event: EventHttpApi::new(HttpMethod::Post, "/webhook"),
                environment: None,
                artifact: "build/WebHook/WebHook.zip",
            },
            WebhookLambda {
                name: "getWebHook",
                handler: "get-webhook",
                event: EventHttpApi::new(HttpMethod::Get, "/webhook"),
                environment: None,
                artifact: "build/WebHook/WebHook.zip",
            },
            WebhookLambda {
                name: "githubWebHook",
                handler: "github-webhook",
                event: EventHttpApi::new(HttpMethod::Post, "/github-webhook"),
                environment: Some(Content::from_iter([(
                    "WEBHOOK_SECRET",
                    Content::from("${ssm:/dev/swift-webhook/webhook_secret}"),
                )])),
                artifact: "build/GitHubWebHook/GitHubWebHook.zip",
            },
        ],
    );

    assert_eq!(built, decoded);
}

#[test]
fn test_built_config_round_trips_through_yaml() {
    let built = support::dynamodb_lambda_api(&support::products_api(), "build/Products/Products.zip").unwrap();
    let text = built.to_yaml_string().unwrap();
    assert_eq!(ServerlessConfig::from_yaml_str(&text).unwrap(), built);

    let authorizers = built.provider.http_api.as_ref().and_then(|h| h.authorizers.as_ref()).unwrap();
    let custom = authorizers.get("customAuthorizer").unwrap();
    assert_eq!(custom.get("resultTtlInSeconds"), Some(&Content::Int(0)));
    assert_eq!(custom.get("enableSimpleResponses"), Some(&Content::Bool(true)));
}
