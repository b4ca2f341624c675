// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use leadfinder::config::settings::ScraperSettings;
use leadfinder::domain::services::business_finder::{
    BusinessFinder, FindBusinessesQuery, FinderError,
};
use leadfinder::infrastructure::scraper::http_finder::HttpBusinessFinder;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query() -> FindBusinessesQuery {
    FindBusinessesQuery {
        category: "bakery".to_string(),
        center: "Lyon".to_string(),
        size: "any".to_string(),
        user_id: "guest".to_string(),
        radius: 300,
        email_scrape: false,
        scrape_limit: 5,
    }
}

fn finder(base_url: String) -> HttpBusinessFinder {
    HttpBusinessFinder::new(&ScraperSettings {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

/// 测试裸数组响应
#[tokio::test]
async fn test_find_businesses_posts_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/find_businesses"))
        .and(body_json(json!({
            "category": "bakery",
            "center": "Lyon",
            "size": "any",
            "user_id": "guest",
            "radius": 300,
            "email_scrape": false,
            "scrape_limit": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Boulangerie", "employees_tag": "2-4", "employees_estimate": "3" },
            { "name": "Patisserie" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = finder(server.uri()).find_businesses(&query()).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].employees_tag.as_deref(), Some("2-4"));
    assert_eq!(records[0].employees_estimate, Some(3));
    assert_eq!(records[1].name.as_deref(), Some("Patisserie"));
}

/// 测试带 results 包装的响应
#[tokio::test]
async fn test_find_businesses_accepts_wrapped_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scraper/find_businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "name": "Wrapped" }]
        })))
        .mount(&server)
        .await;

    let records = finder(format!("{}/scraper", server.uri()))
        .find_businesses(&query())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Wrapped"));
}

/// 测试错误状态
#[tokio::test]
async fn test_find_businesses_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = finder(server.uri()).find_businesses(&query()).await;

    assert!(matches!(result, Err(FinderError::Status(503))));
}

/// 测试无法解析的响应
#[tokio::test]
async fn test_find_businesses_invalid_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = finder(server.uri()).find_businesses(&query()).await;

    assert!(matches!(result, Err(FinderError::InvalidResponse(_))));
}

/// 测试字段类型异常的记录不会导致整个响应失败
#[tokio::test]
async fn test_find_businesses_tolerates_badly_typed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/find_businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Numeric Phone", "phone": 5551234, "distance_meters": "120" },
            { "name": ["not", "a", "name"], "website": "https://odd.example" },
            { "name": "Plain" }
        ])))
        .mount(&server)
        .await;

    let records = finder(server.uri()).find_businesses(&query()).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].phone.as_deref(), Some("5551234"));
    assert_eq!(records[0].distance_meters, Some(120.0));
    assert_eq!(records[1].name, None);
    assert_eq!(records[1].website.as_deref(), Some("https://odd.example"));
    assert_eq!(records[2].name.as_deref(), Some("Plain"));
}
