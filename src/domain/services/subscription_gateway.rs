// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// 订阅服务错误
#[derive(Error, Debug)]
pub enum SubscriptionError {
    #[error("credentials are not configured")]
    MissingCredentials,
    #[error("request failed: {0}")]
    Request(String),
    #[error("{status} from {endpoint}: {body}")]
    Status {
        status: u16,
        endpoint: String,
        body: String,
    },
    #[error("token response did not contain an access_token")]
    MissingAccessToken,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// 订阅计费网关
///
/// 返回值为支付服务的原始 JSON，由 HTTP 层原样返回。
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn create_subscription(
        &self,
        plan_id: &str,
        return_url: &str,
        cancel_url: &str,
    ) -> Result<Value, SubscriptionError>;

    async fn get_subscription_status(&self, subscription_id: &str)
        -> Result<Value, SubscriptionError>;
}
