// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::settings::PayPalSettings;
use crate::domain::services::subscription_gateway::{SubscriptionError, SubscriptionGateway};
use crate::infrastructure::metrics;

const TOKEN_PATH: &str = "/v1/oauth2/token";
const SUBSCRIPTIONS_PATH: &str = "/v1/billing/subscriptions";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Serialize)]
struct CreateSubscriptionRequest<'a> {
    plan_id: &'a str,
    application_context: ApplicationContext<'a>,
}

#[derive(Serialize)]
struct ApplicationContext<'a> {
    brand_name: &'a str,
    return_url: &'a str,
    cancel_url: &'a str,
}

/// PayPal REST 客户端
///
/// 每次调用都先用 client credentials 换取访问令牌，不缓存令牌。
pub struct PayPalClient {
    client: reqwest::Client,
    api_base: Url,
    client_id: Option<String>,
    secret: Option<String>,
    brand_name: String,
}

impl PayPalClient {
    pub fn new(settings: &PayPalSettings) -> Result<Self, SubscriptionError> {
        let api_base = Url::parse(&settings.api_base)
            .map_err(|e| SubscriptionError::Request(format!("invalid api base: {}", e)))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SubscriptionError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_base,
            client_id: settings.client_id.clone(),
            secret: settings.secret.clone(),
            brand_name: settings.brand_name.clone(),
        })
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.api_base.clone();
        url.set_path(path);
        url
    }

    fn subscription_url(&self, subscription_id: &str) -> Url {
        let mut url = self.url(SUBSCRIPTIONS_PATH);
        // path_segments_mut only fails for cannot-be-a-base URLs, which
        // Url::parse never yields for http(s).
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(subscription_id);
        }
        url
    }

    /// 获取访问令牌
    pub async fn access_token(&self) -> Result<String, SubscriptionError> {
        let (Some(client_id), Some(secret)) = (&self.client_id, &self.secret) else {
            return Err(SubscriptionError::MissingCredentials);
        };

        let url = self.url(TOKEN_PATH);
        debug!("Requesting PayPal access token");
        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, "en_US")
            .basic_auth(client_id, Some(secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SubscriptionError::Request(e.to_string()))?;

        let token: TokenResponse = read_json(response, &url).await?;
        token.access_token.ok_or(SubscriptionError::MissingAccessToken)
    }

    async fn create(
        &self,
        plan_id: &str,
        return_url: &str,
        cancel_url: &str,
    ) -> Result<Value, SubscriptionError> {
        let token = self.access_token().await?;
        let url = self.url(SUBSCRIPTIONS_PATH);
        let payload = CreateSubscriptionRequest {
            plan_id,
            application_context: ApplicationContext {
                brand_name: &self.brand_name,
                return_url,
                cancel_url,
            },
        };

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SubscriptionError::Request(e.to_string()))?;
        read_json(response, &url).await
    }

    async fn status(&self, subscription_id: &str) -> Result<Value, SubscriptionError> {
        let token = self.access_token().await?;
        let url = self.subscription_url(subscription_id);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SubscriptionError::Request(e.to_string()))?;
        read_json(response, &url).await
    }
}

async fn read_json<T>(response: reqwest::Response, url: &Url) -> Result<T, SubscriptionError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("PayPal returned {} for {}", status, url.path());
        return Err(SubscriptionError::Status {
            status: status.as_u16(),
            endpoint: url.path().to_string(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| SubscriptionError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl SubscriptionGateway for PayPalClient {
    async fn create_subscription(
        &self,
        plan_id: &str,
        return_url: &str,
        cancel_url: &str,
    ) -> Result<Value, SubscriptionError> {
        let result = self.create(plan_id, return_url, cancel_url).await;
        match &result {
            Ok(_) => {
                info!("Created PayPal subscription for plan {}", plan_id);
                metrics::record_paypal_request("create", "ok");
            }
            Err(_) => metrics::record_paypal_request("create", "error"),
        }
        result
    }

    async fn get_subscription_status(
        &self,
        subscription_id: &str,
    ) -> Result<Value, SubscriptionError> {
        let result = self.status(subscription_id).await;
        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::record_paypal_request("status", outcome);
        result
    }
}
