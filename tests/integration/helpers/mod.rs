// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use leadfinder::config::settings::Settings;
use leadfinder::domain::models::business::BusinessRecord;
use leadfinder::domain::services::business_finder::{
    BusinessFinder, FindBusinessesQuery, FinderError,
};
use leadfinder::domain::services::lead_service::LeadService;
use leadfinder::domain::services::subscription_gateway::{
    SubscriptionError, SubscriptionGateway,
};
use leadfinder::presentation::routes;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const TEST_API_KEY: &str = "integration-key";

/// 记录调用参数的商家查找桩
#[derive(Default)]
pub struct RecordingFinder {
    pub records: Vec<BusinessRecord>,
    pub fail: bool,
    pub queries: Mutex<Vec<FindBusinessesQuery>>,
}

#[async_trait]
impl BusinessFinder for RecordingFinder {
    async fn find_businesses(
        &self,
        query: &FindBusinessesQuery,
    ) -> Result<Vec<BusinessRecord>, FinderError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(FinderError::Unavailable("connection refused".into()));
        }
        Ok(self.records.clone())
    }
}

/// 订阅网关桩
#[derive(Default)]
pub struct StubGateway {
    pub fail: bool,
}

#[async_trait]
impl SubscriptionGateway for StubGateway {
    async fn create_subscription(
        &self,
        plan_id: &str,
        return_url: &str,
        _cancel_url: &str,
    ) -> Result<Value, SubscriptionError> {
        if self.fail {
            return Err(SubscriptionError::Status {
                status: 422,
                endpoint: "/v1/billing/subscriptions".into(),
                body: "UNPROCESSABLE_ENTITY".into(),
            });
        }
        Ok(json!({
            "id": "I-TEST",
            "plan_id": plan_id,
            "status": "APPROVAL_PENDING",
            "links": [{ "rel": "approve", "href": return_url }]
        }))
    }

    async fn get_subscription_status(
        &self,
        subscription_id: &str,
    ) -> Result<Value, SubscriptionError> {
        if self.fail {
            return Err(SubscriptionError::MissingCredentials);
        }
        Ok(json!({ "id": subscription_id, "status": "ACTIVE" }))
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub finder: Arc<RecordingFinder>,
}

impl TestApp {
    pub fn last_query(&self) -> FindBusinessesQuery {
        self.finder
            .queries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("finder was not called")
    }

    pub fn finder_calls(&self) -> usize {
        self.finder.queries.lock().unwrap().len()
    }
}

pub fn sample_records() -> Vec<BusinessRecord> {
    serde_json::from_value(json!([
        {
            "name": "Tiny Tools",
            "phone": "+33 1 00 00 00 01",
            "email": "contact@tinytools.fr",
            "website": "https://tinytools.fr",
            "lat": 48.851, "lon": 2.351, "distance_meters": 40.0,
            "employees_tag": "1-5"
        },
        {
            "name": "Mid Metal",
            "phone": "+33 1 00 00 00 02",
            "email": "hello@midmetal.fr",
            "website": "https://midmetal.fr",
            "lat": 48.852, "lon": 2.352, "distance_meters": 120.0,
            "employees_tag": "10-50",
            "opening_hours": "Mo-Fr 09:00-18:00"
        },
        {
            "name": "Guess Works",
            "phone": "+33 1 00 00 00 03",
            "email": null,
            "website": null,
            "employees_estimate": 25
        },
        {
            "name": "Mystery Co",
            "phone": null,
            "email": "who@mystery.co",
            "website": "https://mystery.co",
            "employees_tag": "lots"
        }
    ]))
    .expect("fixture records")
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(
        RecordingFinder {
            records: sample_records(),
            ..Default::default()
        },
        StubGateway::default(),
    )
}

pub fn create_test_app_with(finder: RecordingFinder, gateway: StubGateway) -> TestApp {
    let settings = Arc::new(
        Settings::with_overrides(&[("auth.api_key", TEST_API_KEY)]).expect("test settings"),
    );
    let finder = Arc::new(finder);
    let leads = Arc::new(LeadService::new(finder.clone()));
    let billing: Arc<dyn SubscriptionGateway> = Arc::new(gateway);

    let app = routes::routes(settings, leads, billing);
    let server = TestServer::new(app).expect("test server");

    TestApp { server, finder }
}
