//! Client configuration

/// Connection settings for the SMS backend.
///
/// One externally supplied base URL selects the backend host per deployment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. `None` preserves the historical behavior of a hung
    /// request staying in flight until the backend responds.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SMS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            request_timeout_secs: std::env::var("SMS_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }
}
