// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 商家记录
///
/// 由抓取服务返回，单次请求内只读使用。
/// 员工字段之外的内容原样透传给调用方。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub distance_meters: Option<f64>,
    /// 员工数标签，如 "10-50" 或 "12"
    #[serde(default, deserialize_with = "lenient_tag")]
    pub employees_tag: Option<String>,
    /// 员工数估计值
    #[serde(default, deserialize_with = "lenient_integer")]
    pub employees_estimate: Option<i64>,
    /// 抓取服务返回的其他字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BusinessRecord {
    /// 按包含标志清除邮箱/电话
    pub fn redacted(mut self, include_email: bool, include_phone: bool) -> Self {
        if !include_email {
            self.email = None;
        }
        if !include_phone {
            self.phone = None;
        }
        self
    }
}

// A single badly typed field must not reject the whole scraper response:
// numbers become text, anything else that is not a string is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|f| f.is_finite()))
}

// Scrapers emit tags both as strings and as bare numbers. A numeric zero
// counts as "no tag" so the estimate is consulted instead.
fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// Anything that is not integer-convertible is treated as absent instead of
// rejecting the whole record.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
