// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::config::settings::ScraperSettings;
use crate::domain::models::business::BusinessRecord;
use crate::domain::services::business_finder::{
    BusinessFinder, FindBusinessesQuery, FinderError,
};

const FIND_BUSINESSES_PATH: &str = "find_businesses";

/// 抓取服务可能返回裸数组或 `{ "results": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum FinderResponse {
    List(Vec<BusinessRecord>),
    Wrapped { results: Vec<BusinessRecord> },
}

impl From<FinderResponse> for Vec<BusinessRecord> {
    fn from(response: FinderResponse) -> Self {
        match response {
            FinderResponse::List(records) | FinderResponse::Wrapped { results: records } => records,
        }
    }
}

/// 基于 HTTP 的商家查找实现
///
/// 向 `{base_url}/find_businesses` POST 查询参数。
pub struct HttpBusinessFinder {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpBusinessFinder {
    pub fn new(settings: &ScraperSettings) -> Result<Self, FinderError> {
        let endpoint = endpoint_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("leadfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FinderError::Unavailable(e.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

fn endpoint_url(base_url: &str) -> Result<Url, FinderError> {
    let mut base = Url::parse(base_url)
        .map_err(|e| FinderError::Unavailable(format!("invalid scraper url {}: {}", base_url, e)))?;
    // Treat the base as a directory so join() appends instead of replacing.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(FIND_BUSINESSES_PATH)
        .map_err(|e| FinderError::Unavailable(e.to_string()))
}

#[async_trait]
impl BusinessFinder for HttpBusinessFinder {
    async fn find_businesses(
        &self,
        query: &FindBusinessesQuery,
    ) -> Result<Vec<BusinessRecord>, FinderError> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(query)
            .send()
            .await
            .map_err(|e| {
                error!("Scraper request failed: {}", e);
                FinderError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Scraper returned error status: {}", status);
            return Err(FinderError::Status(status.as_u16()));
        }

        let body: FinderResponse = response
            .json()
            .await
            .map_err(|e| FinderError::InvalidResponse(e.to_string()))?;
        Ok(body.into())
    }
}
