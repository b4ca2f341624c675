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

use leadfinder::config::settings::Settings;
use leadfinder::domain::services::lead_service::LeadService;
use leadfinder::domain::services::subscription_gateway::SubscriptionGateway;
use leadfinder::infrastructure::metrics::init_metrics;
use leadfinder::infrastructure::paypal::client::PayPalClient;
use leadfinder::infrastructure::scraper::http_finder::HttpBusinessFinder;
use leadfinder::presentation::routes;
use leadfinder::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env (if present) before anything reads the environment
    let dotenv = dotenvy::dotenv();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting leadfinder...");
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env: {}", e),
    }

    // 3. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");
    if settings.auth.api_key == "dev_key" {
        warn!("Using the default development API key");
    }

    // 4. Metrics
    init_metrics(&settings.metrics);

    // 5. Collaborators
    let finder = Arc::new(HttpBusinessFinder::new(&settings.scraper)?);
    info!("Business finder targeting {}", settings.scraper.base_url);
    let leads = Arc::new(LeadService::new(finder));

    let billing: Arc<dyn SubscriptionGateway> = Arc::new(PayPalClient::new(&settings.paypal)?);
    if settings.paypal.client_id.is_none() || settings.paypal.secret.is_none() {
        warn!("PayPal credentials not configured; subscription endpoints will fail");
    }

    // 6. Start HTTP server
    let app = routes::routes(settings.clone(), leads, billing);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
