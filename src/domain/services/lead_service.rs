// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::application::dto::lead_request::LeadRequestDto;
use crate::application::dto::lead_response::{ContactsResponseDto, SearchResponseDto};
use crate::domain::models::business::BusinessRecord;
use crate::domain::models::contact::{Contact, ContactRow};
use crate::domain::services::business_finder::{BusinessFinder, FindBusinessesQuery, FinderError};
use crate::infrastructure::metrics;

/// 传给抓取服务的规模参数，员工数过滤在本服务完成
const ANY_SIZE: &str = "any";

#[derive(Error, Debug)]
pub enum LeadServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Provide city_or_address OR lat & lon")]
    MissingLocation,
    #[error("Scraper error: {0}")]
    Finder(#[from] FinderError),
}

/// 线索服务
///
/// 解析中心点、调用商家查找服务、按员工数过滤并按需清除联系方式。
pub struct LeadService {
    finder: Arc<dyn BusinessFinder>,
}

impl LeadService {
    pub fn new(finder: Arc<dyn BusinessFinder>) -> Self {
        Self { finder }
    }

    /// 搜索商家，返回完整记录
    pub async fn search(&self, dto: &LeadRequestDto) -> Result<SearchResponseDto, LeadServiceError> {
        let results: Vec<BusinessRecord> = self
            .find_matching(dto)
            .await?
            .into_iter()
            .map(|record| record.redacted(dto.include_email, dto.include_phone))
            .collect();
        Ok(results.into())
    }

    /// 搜索商家，返回联系人投影
    pub async fn contacts(
        &self,
        dto: &LeadRequestDto,
    ) -> Result<ContactsResponseDto, LeadServiceError> {
        let contacts: Vec<Contact> = self
            .find_matching(dto)
            .await?
            .into_iter()
            .map(|record| Contact::from_record(record, dto.include_email, dto.include_phone))
            .collect();
        Ok(contacts.into())
    }

    /// 搜索商家，返回 CSV 导出行
    pub async fn export_rows(
        &self,
        dto: &LeadRequestDto,
    ) -> Result<Vec<ContactRow>, LeadServiceError> {
        Ok(self.contacts(dto).await?.contacts.into_iter().map(ContactRow::from).collect())
    }

    /// 调用查找服务并应用员工数过滤
    ///
    /// # 错误
    ///
    /// - 参数校验失败
    /// - 未提供地址或完整经纬度
    /// - 抓取服务调用失败
    pub async fn find_matching(
        &self,
        dto: &LeadRequestDto,
    ) -> Result<Vec<BusinessRecord>, LeadServiceError> {
        dto.validate()
            .map_err(|e| LeadServiceError::ValidationError(e.to_string()))?;

        let center = dto.center().ok_or(LeadServiceError::MissingLocation)?;
        let query = FindBusinessesQuery {
            category: dto.category.clone(),
            center: center.to_string(),
            size: ANY_SIZE.to_string(),
            user_id: dto.user_id.clone(),
            radius: dto.radius,
            email_scrape: dto.include_email,
            scrape_limit: dto.scrape_limit,
        };

        info!(
            "Finding businesses: category={}, center={}, radius={}",
            query.category, query.center, query.radius
        );
        let records = match self.finder.find_businesses(&query).await {
            Ok(records) => {
                metrics::record_finder_request("ok");
                records
            }
            Err(e) => {
                warn!("Business finder failed: {}", e);
                metrics::record_finder_request("error");
                return Err(e.into());
            }
        };

        let total = records.len();
        let filter = dto.employee_filter();
        let matched: Vec<BusinessRecord> =
            records.into_iter().filter(|r| filter.matches(r)).collect();

        debug!(
            "Employee filter kept {} of {} records (min={:?}, max={:?}, strict={})",
            matched.len(),
            total,
            dto.employee_min,
            dto.employee_max,
            dto.strict_employee_filter
        );
        metrics::record_filtered(total - matched.len());

        Ok(matched)
    }
}

#[cfg(test)]
#[path = "lead_service_test.rs"]
mod tests;
