// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 启动时加载一次，之后只读地共享给各请求处理器。
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 认证与跨域配置
    pub auth: AuthSettings,
    /// 抓取服务配置
    pub scraper: ScraperSettings,
    /// PayPal 配置
    pub paypal: PayPalSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 请求头 `X-API-Key` 必须匹配的密钥
    pub api_key: String,
    /// 允许的跨域来源，逗号分隔；`*` 表示任意来源
    pub allow_origins: String,
}

impl AuthSettings {
    /// 解析允许的来源列表
    ///
    /// 返回 `None` 表示允许任意来源（列表中出现 `*` 即视为任意）。
    pub fn origin_list(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allow_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.iter().any(|o| o == "*") {
            return None;
        }
        Some(origins)
    }
}

/// 抓取服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 抓取服务基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// PayPal 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalSettings {
    pub client_id: Option<String>,
    pub secret: Option<String>,
    /// REST API 基础URL（默认沙箱）
    pub api_base: String,
    /// 订阅页面上显示的品牌名
    pub brand_name: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `LEADFINDER__` 前缀的环境变量（如 `LEADFINDER__AUTH__API_KEY`）。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LEADFINDER").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用默认值和给定覆盖项创建配置，不读取文件和环境变量
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("auth.api_key", "dev_key")?
            .set_default("auth.allow_origins", "*")?
            .set_default("scraper.base_url", "http://127.0.0.1:8001")?
            .set_default("scraper.timeout_secs", 60)?
            .set_default("paypal.api_base", "https://api-m.sandbox.paypal.com")?
            .set_default("paypal.brand_name", "Local Lead Finder")?
            .set_default("paypal.timeout_secs", 15)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
