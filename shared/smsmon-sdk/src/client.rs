//! SMS messages API client
//!
//! Typed facade over the message and statistics REST surface at
//! `{base_url}/api/v1/sms`. Each method issues exactly one HTTP call;
//! parameters pass through unvalidated because the backend owns
//! bounds-checking.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::Result;
use crate::http;
use crate::types::{OperatorStatistics, PageResponse, SmsMessage, SmsStatistics, SmsStatus};

/// Sort direction for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDir {
    type Err = ParseSortDirError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseSortDirError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort direction: {0}")]
pub struct ParseSortDirError(pub String);

/// Query parameters for the full message listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort_by: "createdAt".to_string(),
            sort_dir: SortDir::Desc,
        }
    }
}

/// Query parameters for the by-operator listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageParams {
    pub page: u32,
    pub size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// Client for the `/api/v1/sms` surface.
#[derive(Debug, Clone)]
pub struct SmsApiClient {
    http: Client,
    base_url: String,
}

impl SmsApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().expect("Failed to create HTTP client");

        Self {
            http,
            base_url: format!("{}/api/v1/sms", config.base_url.trim_end_matches('/')),
        }
    }

    /// Create a new SMS message. The backend assigns the numeric id.
    pub async fn create(&self, message: &SmsMessage) -> Result<SmsMessage> {
        let url = format!("{}/messages", self.base_url);

        info!(message_id = %message.message_id, "Creating SMS message");

        let response = self.http.post(&url).json(message).send().await?;
        http::expect_json(response).await
    }

    /// Get an SMS message by its backend-assigned id.
    pub async fn get_by_id(&self, id: i64) -> Result<SmsMessage> {
        let url = format!("{}/messages/{}", self.base_url, id);

        debug!(id, "Fetching SMS message");

        let response = self.http.get(&url).send().await?;
        http::expect_json(response).await
    }

    /// Get an SMS message by its external message id.
    pub async fn get_by_message_id(&self, message_id: &str) -> Result<SmsMessage> {
        let url = format!("{}/messages/by-message-id/{}", self.base_url, message_id);

        debug!(message_id, "Fetching SMS message by message id");

        let response = self.http.get(&url).send().await?;
        http::expect_json(response).await
    }

    /// List all messages with pagination and sorting.
    pub async fn list_all(&self, params: &ListParams) -> Result<PageResponse<SmsMessage>> {
        let url = format!("{}/messages", self.base_url);

        debug!(page = params.page, size = params.size, "Listing SMS messages");

        let response = self.http.get(&url).query(params).send().await?;
        http::expect_json(response).await
    }

    /// List messages routed through one operator.
    pub async fn list_by_operator(
        &self,
        operator_id: i64,
        params: &PageParams,
    ) -> Result<PageResponse<SmsMessage>> {
        let url = format!("{}/messages/operator/{}", self.base_url, operator_id);

        debug!(operator_id, page = params.page, "Listing SMS messages by operator");

        let response = self.http.get(&url).query(params).send().await?;
        http::expect_json(response).await
    }

    /// List all messages in one status. Unpaginated.
    pub async fn list_by_status(&self, status: SmsStatus) -> Result<Vec<SmsMessage>> {
        let url = format!("{}/messages/status/{}", self.base_url, status.as_str());

        debug!(status = status.as_str(), "Listing SMS messages by status");

        let response = self.http.get(&url).send().await?;
        http::expect_json(response).await
    }

    /// Update the status of a message. The new status travels as a query
    /// parameter, not a body.
    pub async fn update_status(&self, id: i64, status: SmsStatus) -> Result<SmsMessage> {
        let url = format!("{}/messages/{}/status", self.base_url, id);

        info!(id, status = status.as_str(), "Updating SMS message status");

        let response = self
            .http
            .put(&url)
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        http::expect_json(response).await
    }

    /// Delete a message.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/messages/{}", self.base_url, id);

        info!(id, "Deleting SMS message");

        let response = self.http.delete(&url).send().await?;
        http::expect_empty(response).await
    }

    /// Delivery counts per status over a date range.
    pub async fn delivery_statistics(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<SmsStatistics>> {
        let url = format!("{}/statistics/delivery", self.base_url);

        debug!(%start_date, %end_date, "Fetching delivery statistics");

        let response = self
            .http
            .get(&url)
            .query(&date_range_params(start_date, end_date))
            .send()
            .await?;
        http::expect_json(response).await
    }

    /// Delivery counts per (operator, status) over a date range.
    pub async fn operator_statistics(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<OperatorStatistics>> {
        let url = format!("{}/statistics/operators", self.base_url);

        debug!(%start_date, %end_date, "Fetching operator statistics");

        let response = self
            .http
            .get(&url)
            .query(&date_range_params(start_date, end_date))
            .send()
            .await?;
        http::expect_json(response).await
    }

    /// Backend health probe. The response body is plain text, not JSON.
    pub async fn health_check(&self) -> Result<String> {
        let url = format!("{}/health", self.base_url);

        let response = self.http.get(&url).send().await?;
        http::expect_text(response).await
    }
}

/// Dates serialize as ISO-8601 instants with millisecond precision.
fn date_range_params(start: DateTime<Utc>, end: DateTime<Utc>) -> [(&'static str, String); 2] {
    [
        ("startDate", start.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ("endDate", end.to_rfc3339_opts(SecondsFormat::Millis, true)),
    ]
}
