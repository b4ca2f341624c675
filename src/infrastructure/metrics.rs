// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

pub const FINDER_REQUESTS: &str = "leadfinder_finder_requests_total";
pub const RECORDS_FILTERED: &str = "leadfinder_records_filtered_total";
pub const PAYPAL_REQUESTS: &str = "leadfinder_paypal_requests_total";

pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_finder_request(outcome: &'static str) {
    metrics::counter!(FINDER_REQUESTS, "outcome" => outcome).increment(1);
}

pub fn record_filtered(dropped: usize) {
    metrics::counter!(RECORDS_FILTERED).increment(dropped as u64);
}

pub fn record_paypal_request(operation: &'static str, outcome: &'static str) {
    metrics::counter!(PAYPAL_REQUESTS, "operation" => operation, "outcome" => outcome)
        .increment(1);
}
