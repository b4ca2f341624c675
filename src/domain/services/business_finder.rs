// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::business::BusinessRecord;

/// 商家查找错误
#[derive(Error, Debug)]
pub enum FinderError {
    /// 抓取服务不可达或超时
    #[error("scraper unavailable: {0}")]
    Unavailable(String),
    /// 抓取服务返回非成功状态
    #[error("scraper returned status {0}")]
    Status(u16),
    /// 响应无法解析
    #[error("invalid scraper response: {0}")]
    InvalidResponse(String),
}

/// 商家查找参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindBusinessesQuery {
    pub category: String,
    /// 中心点（"lat,lon" 或地址）
    pub center: String,
    pub size: String,
    pub user_id: String,
    /// 半径（米）
    pub radius: u32,
    pub email_scrape: bool,
    pub scrape_limit: u32,
}

/// 商家查找服务
///
/// 抓取逻辑本身由外部服务实现，这里只约定一次调用的输入输出。
#[async_trait]
pub trait BusinessFinder: Send + Sync {
    async fn find_businesses(
        &self,
        query: &FindBusinessesQuery,
    ) -> Result<Vec<BusinessRecord>, FinderError>;
}
