// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 指标记录与导出
pub mod metrics;
/// PayPal 订阅客户端
pub mod paypal;
/// 抓取服务客户端
pub mod scraper;
