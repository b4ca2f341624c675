// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use leadfinder::config::settings::PayPalSettings;
use leadfinder::domain::services::subscription_gateway::{SubscriptionError, SubscriptionGateway};
use leadfinder::infrastructure::paypal::client::PayPalClient;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(api_base: String) -> PayPalSettings {
    PayPalSettings {
        client_id: Some("id".to_string()),
        secret: Some("secret".to_string()),
        api_base,
        brand_name: "Local Lead Finder".to_string(),
        timeout_secs: 5,
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("accept", "application/json"))
        .and(header("accept-language", "en_US"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A21AA-token",
            "token_type": "Bearer",
            "expires_in": 32400
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// 测试创建订阅的完整调用链
#[tokio::test]
async fn test_create_subscription_fetches_token_then_posts() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/billing/subscriptions"))
        .and(header("authorization", "Bearer A21AA-token"))
        .and(body_json(json!({
            "plan_id": "P-123",
            "application_context": {
                "brand_name": "Local Lead Finder",
                "return_url": "https://app.example/ok",
                "cancel_url": "https://app.example/cancel"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "I-NEW",
            "status": "APPROVAL_PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PayPalClient::new(&settings(server.uri())).unwrap();
    let subscription = client
        .create_subscription("P-123", "https://app.example/ok", "https://app.example/cancel")
        .await
        .unwrap();

    assert_eq!(subscription["id"], "I-NEW");
}

/// 测试查询订阅状态
#[tokio::test]
async fn test_subscription_status_uses_bearer_token() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/billing/subscriptions/I-BW452GLLEP1G"))
        .and(header("authorization", "Bearer A21AA-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "I-BW452GLLEP1G",
            "status": "ACTIVE"
        })))
        .mount(&server)
        .await;

    let client = PayPalClient::new(&settings(server.uri())).unwrap();
    let status = client.get_subscription_status("I-BW452GLLEP1G").await.unwrap();

    assert_eq!(status["status"], "ACTIVE");
}

/// 测试令牌获取失败时不再继续调用
#[tokio::test]
async fn test_token_failure_is_reported_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = PayPalClient::new(&settings(server.uri())).unwrap();
    let result = client.get_subscription_status("I-1").await;

    match result {
        Err(SubscriptionError::Status {
            status,
            endpoint,
            body,
        }) => {
            assert_eq!(status, 401);
            assert_eq!(endpoint, "/v1/oauth2/token");
            assert_eq!(body, "invalid_client");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// 测试令牌响应缺少 access_token
#[tokio::test]
async fn test_token_without_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scope": "x" })))
        .mount(&server)
        .await;

    let client = PayPalClient::new(&settings(server.uri())).unwrap();
    let result = client.access_token().await;

    assert!(matches!(result, Err(SubscriptionError::MissingAccessToken)));
}

/// 测试订阅接口返回错误状态
#[tokio::test]
async fn test_create_subscription_error_status() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path("/v1/billing/subscriptions"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "name": "UNPROCESSABLE_ENTITY" })),
        )
        .mount(&server)
        .await;

    let client = PayPalClient::new(&settings(server.uri())).unwrap();
    let err = client
        .create_subscription("P-bad", "https://app.example/ok", "https://app.example/cancel")
        .await
        .unwrap_err();

    assert!(matches!(err, SubscriptionError::Status { status: 422, .. }));
}
