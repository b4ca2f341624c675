// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// `RUST_LOG` 未设置时使用 `info,leadfinder=debug,tower_http=info`；
/// `LEADFINDER_LOG_FORMAT=json` 时输出 JSON 格式。
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,leadfinder=debug,tower_http=info".into());
    let json = std::env::var("LEADFINDER_LOG_FORMAT").is_ok_and(|v| v == "json");

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    // Tests may initialize more than once.
    if let Err(e) = result {
        eprintln!("telemetry already initialized: {}", e);
    }
}
