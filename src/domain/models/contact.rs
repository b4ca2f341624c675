// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::business::BusinessRecord;

/// 联系人视图
///
/// `/api/contacts` 返回的商家投影，未请求的邮箱/电话为 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub distance_m: Option<f64>,
}

impl Contact {
    pub fn from_record(record: BusinessRecord, include_email: bool, include_phone: bool) -> Self {
        let record = record.redacted(include_email, include_phone);
        Self {
            name: record.name,
            phone: record.phone,
            email: record.email,
            website: record.website,
            lat: record.lat,
            lon: record.lon,
            distance_m: record.distance_meters,
        }
    }
}

/// CSV 导出行，缺失值为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl ContactRow {
    pub const HEADER: [&'static str; 4] = ["name", "phone", "email", "website"];
}

impl From<Contact> for ContactRow {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name.unwrap_or_default(),
            phone: contact.phone.unwrap_or_default(),
            email: contact.email.unwrap_or_default(),
            website: contact.website.unwrap_or_default(),
        }
    }
}
