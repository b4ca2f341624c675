// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Query},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::{
        dto::{lead_request::LeadRequestDto, lead_response::ContactsResponseDto},
        export::{contacts_to_csv, CONTACTS_FILENAME},
    },
    domain::services::lead_service::LeadService,
    presentation::errors::AppError,
};

/// 返回匹配商家的联系人列表
pub async fn list_contacts(
    Extension(leads): Extension<Arc<LeadService>>,
    Query(dto): Query<LeadRequestDto>,
) -> Result<Json<ContactsResponseDto>, AppError> {
    let response = leads.contacts(&dto).await?;
    info!(
        "Contacts for '{}' returned {} entries",
        dto.category, response.count
    );
    Ok(Json(response))
}

/// 以 CSV 附件形式导出联系人
pub async fn export_contacts(
    Extension(leads): Extension<Arc<LeadService>>,
    Query(dto): Query<LeadRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let rows = leads.export_rows(&dto).await?;
    let csv = contacts_to_csv(&rows)?;
    info!("Exported {} contacts for '{}'", rows.len(), dto.category);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", CONTACTS_FILENAME),
            ),
        ],
        csv,
    ))
}
