// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::settings::{AuthSettings, Settings};
use crate::domain::services::lead_service::LeadService;
use crate::domain::services::subscription_gateway::SubscriptionGateway;
use crate::presentation::handlers::{contacts_handler, search_handler, subscription_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};

/// 创建应用路由
///
/// `/api/*` 需要 API 密钥，`/health` 和 `/version` 公开
///
/// # 参数
///
/// * `settings` - 应用配置
/// * `leads` - 线索服务
/// * `billing` - 订阅计费网关
pub fn routes(
    settings: Arc<Settings>,
    leads: Arc<LeadService>,
    billing: Arc<dyn SubscriptionGateway>,
) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let protected_routes = Router::new()
        .route(
            "/api/search",
            get(search_handler::search_get).post(search_handler::search_post),
        )
        .route("/api/contacts", get(contacts_handler::list_contacts))
        .route(
            "/api/contacts/export",
            get(contacts_handler::export_contacts),
        )
        .route(
            "/api/subscriptions/create",
            post(subscription_handler::create_subscription),
        )
        .route(
            "/api/subscriptions/status",
            get(subscription_handler::subscription_status),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            AuthState::new(settings.auth.api_key.as_str()),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(leads))
        .layer(Extension(billing))
        .layer(Extension(settings.clone()))
        .layer(cors_layer(&settings.auth))
        .layer(TraceLayer::new_for_http())
}

/// 按配置构建跨域层
///
/// 任意来源时不允许携带凭证；显式列表时镜像请求的方法和头并允许凭证。
fn cors_layer(auth: &AuthSettings) -> CorsLayer {
    let Some(origins) = auth.origin_list() else {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
