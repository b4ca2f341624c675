// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::dto::{lead_request::LeadRequestDto, lead_response::SearchResponseDto},
    domain::services::lead_service::LeadService,
    presentation::errors::AppError,
};

/// 处理 GET 搜索请求
///
/// 参数来自查询串，便于快速测试
pub async fn search_get(
    Extension(leads): Extension<Arc<LeadService>>,
    Query(dto): Query<LeadRequestDto>,
) -> Result<Json<SearchResponseDto>, AppError> {
    search(&leads, dto).await
}

/// 处理 POST 搜索请求
///
/// # 参数
///
/// * `leads` - 线索服务
/// * `payload` - 搜索请求数据
///
/// # 错误
///
/// - 参数校验失败或缺少位置信息（400）
/// - 抓取服务错误（502）
pub async fn search_post(
    Extension(leads): Extension<Arc<LeadService>>,
    Json(payload): Json<LeadRequestDto>,
) -> Result<Json<SearchResponseDto>, AppError> {
    search(&leads, payload).await
}

async fn search(
    leads: &LeadService,
    dto: LeadRequestDto,
) -> Result<Json<SearchResponseDto>, AppError> {
    let response = leads.search(&dto).await?;
    info!(
        "Search for '{}' returned {} results",
        dto.category, response.count
    );
    Ok(Json(response))
}
