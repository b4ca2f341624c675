// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 搜索中心点
#[derive(Debug, Clone, PartialEq)]
pub enum GeoCenter {
    /// 经纬度坐标
    Coordinates { lat: f64, lon: f64 },
    /// 城市或地址文本，由抓取服务自行地理编码
    Address(String),
}

impl GeoCenter {
    /// 从请求参数解析中心点
    ///
    /// 经纬度同时给出时优先使用；否则使用非空地址；都没有时返回 `None`。
    pub fn resolve(lat: Option<f64>, lon: Option<f64>, address: Option<&str>) -> Option<Self> {
        if let (Some(lat), Some(lon)) = (lat, lon) {
            return Some(GeoCenter::Coordinates { lat, lon });
        }
        address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|a| GeoCenter::Address(a.to_string()))
    }
}

impl fmt::Display for GeoCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug 格式保留小数点：48.0 而不是 48
            GeoCenter::Coordinates { lat, lon } => write!(f, "{:?},{:?}", lat, lon),
            GeoCenter::Address(address) => f.write_str(address),
        }
    }
}
