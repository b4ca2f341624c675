// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::subscription_request::{CreateSubscriptionDto, SubscriptionStatusQuery},
    domain::services::subscription_gateway::SubscriptionGateway,
    presentation::errors::AppError,
};

/// 创建订阅，原样返回 PayPal 响应
pub async fn create_subscription(
    Extension(gateway): Extension<Arc<dyn SubscriptionGateway>>,
    Json(payload): Json<CreateSubscriptionDto>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;
    let subscription = gateway
        .create_subscription(&payload.plan_id, &payload.return_url, &payload.cancel_url)
        .await?;
    Ok(Json(subscription))
}

/// 查询订阅状态，原样返回 PayPal 响应
pub async fn subscription_status(
    Extension(gateway): Extension<Arc<dyn SubscriptionGateway>>,
    Query(query): Query<SubscriptionStatusQuery>,
) -> Result<Json<Value>, AppError> {
    query.validate()?;
    let status = gateway
        .get_subscription_status(&query.subscription_id)
        .await?;
    Ok(Json(status))
}
