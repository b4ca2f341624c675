// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::services::lead_service::LeadServiceError;
use crate::domain::services::subscription_gateway::SubscriptionError;

/// 认证失败
#[derive(Debug, thiserror::Error)]
#[error("Invalid API key")]
pub struct Unauthorized;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按底层错误类型映射为 HTTP 状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if self.0.downcast_ref::<Unauthorized>().is_some() {
            return (StatusCode::UNAUTHORIZED, self.0.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<LeadServiceError>() {
            let status = match err {
                LeadServiceError::ValidationError(_) | LeadServiceError::MissingLocation => {
                    StatusCode::BAD_REQUEST
                }
                LeadServiceError::Finder(_) => StatusCode::BAD_GATEWAY,
            };
            return (status, err.to_string());
        }

        if let Some(err) = self.0.downcast_ref::<SubscriptionError>() {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("PayPal error: {}", err),
            );
        }

        if let Some(err) = self.0.downcast_ref::<validator::ValidationErrors>() {
            return (StatusCode::BAD_REQUEST, format!("Validation failed: {}", err));
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();
        if status.is_server_error() {
            error!("Request failed: {}", error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
