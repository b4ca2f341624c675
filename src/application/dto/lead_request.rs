// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::models::employee_range::EmployeeRange;
use crate::domain::models::geo::GeoCenter;
use crate::domain::services::employee_filter::EmployeeFilter;

/// 商家/联系人查询参数
///
/// GET 查询串与 POST JSON 共用同一结构和默认值。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LeadRequestDto {
    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: String,
    #[serde(default)]
    pub city_or_address: Option<String>,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be within [-90, 90]"))]
    pub lat: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "lon must be within [-180, 180]"))]
    pub lon: Option<f64>,
    /// 搜索半径（米）
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub include_email: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub include_phone: bool,
    #[serde(default)]
    pub employee_min: Option<i64>,
    #[serde(default)]
    pub employee_max: Option<i64>,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// 单次最多抓取的网站数
    #[serde(default = "default_scrape_limit")]
    pub scrape_limit: u32,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub strict_employee_filter: bool,
}

fn default_radius() -> u32 {
    300
}

fn default_user_id() -> String {
    "guest".to_string()
}

fn default_scrape_limit() -> u32 {
    5
}

/// 开关参数：接受布尔值、0/1 以及 true/false、yes/no、on/off（不区分大小写）
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) if n.as_u64() == Some(1) => Ok(true),
        Value::Number(n) if n.as_u64() == Some(0) => Ok(false),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean flag: {other:?}"))),
        },
        other => Err(de::Error::custom(format!("invalid boolean flag: {other}"))),
    }
}

impl LeadRequestDto {
    /// 新建只含类别的查询，其余字段取默认值
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            city_or_address: None,
            lat: None,
            lon: None,
            radius: default_radius(),
            include_email: false,
            include_phone: false,
            employee_min: None,
            employee_max: None,
            user_id: default_user_id(),
            scrape_limit: default_scrape_limit(),
            strict_employee_filter: false,
        }
    }

    pub fn center(&self) -> Option<GeoCenter> {
        GeoCenter::resolve(self.lat, self.lon, self.city_or_address.as_deref())
    }

    pub fn employee_filter(&self) -> EmployeeFilter {
        EmployeeFilter::new(
            EmployeeRange::new(self.employee_min, self.employee_max),
            self.strict_employee_filter,
        )
    }
}
