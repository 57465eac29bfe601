//! Network test API client
//!
//! Triggers synthetic load and stress runs on the backend at
//! `{base_url}/api/v1/sms/simulation`. Both operations send their parameters
//! as query parameters with no client-side bound checking; the runs execute
//! entirely server-side and the results come back as immutable snapshots.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::http;
use crate::types::{LoadTestResult, StressTestResult};

/// Parameters for a fixed-count load test burst.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestParams {
    pub message_count: u32,
    pub concurrent_users: u32,
}

impl Default for LoadTestParams {
    fn default() -> Self {
        Self {
            message_count: 1000,
            concurrent_users: 10,
        }
    }
}

/// Parameters for a sustained-duration stress run.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestParams {
    pub max_load: u32,
    #[serde(rename = "duration")]
    pub duration_secs: u32,
}

impl Default for StressTestParams {
    fn default() -> Self {
        Self {
            max_load: 5000,
            duration_secs: 60,
        }
    }
}

/// Client for the `/api/v1/sms/simulation` surface.
#[derive(Debug, Clone)]
pub struct NetworkTestClient {
    http: Client,
    base_url: String,
}

impl NetworkTestClient {
    pub fn new(config: &ApiConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().expect("Failed to create HTTP client");

        Self {
            http,
            base_url: format!(
                "{}/api/v1/sms/simulation",
                config.base_url.trim_end_matches('/')
            ),
        }
    }

    /// Run a load test: a fixed-count burst issued concurrently backend-side.
    pub async fn run_load_test(&self, params: &LoadTestParams) -> Result<LoadTestResult> {
        let url = format!("{}/load-test", self.base_url);

        info!(
            message_count = params.message_count,
            concurrent_users = params.concurrent_users,
            "Running load test"
        );

        let response = self.http.post(&url).query(params).send().await?;
        http::expect_json(response).await
    }

    /// Run a stress test: escalating load sustained for a fixed duration.
    pub async fn run_stress_test(&self, params: &StressTestParams) -> Result<StressTestResult> {
        let url = format!("{}/stress-test", self.base_url);

        info!(
            max_load = params.max_load,
            duration_secs = params.duration_secs,
            "Running stress test"
        );

        let response = self.http.post(&url).query(params).send().await?;
        http::expect_json(response).await
    }
}
