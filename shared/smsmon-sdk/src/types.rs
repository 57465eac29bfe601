//! Wire types shared with the SMS backend REST API
//!
//! Field names serialize in camelCase and enum tokens in SCREAMING_SNAKE_CASE
//! to match the backend JSON. All of these are value records from the client's
//! perspective: they are read from responses or handed whole to the backend,
//! never derived into new instances client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// An SMS message as stored by the backend.
///
/// `id` is assigned by the backend on creation; `message_id` is the stable
/// externally visible correlation key and is generated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<i64>,
    pub sender_number: String,
    pub recipient_number: String,
    pub message_content: String,
    pub status: SmsStatus,
    pub priority: SmsPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SmsMessage {
    /// Create a new outbound message with a generated message id.
    ///
    /// Starts in `Pending` / `Normal`; timestamps are backend-assigned.
    pub fn new(
        sender_number: impl Into<String>,
        recipient_number: impl Into<String>,
        message_content: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            message_id: Uuid::new_v4().to_string(),
            operator_id: None,
            sender_number: sender_number.into(),
            recipient_number: recipient_number.into(),
            message_content: message_content.into(),
            status: SmsStatus::Pending,
            priority: SmsPriority::Normal,
            scheduled_at: None,
            sent_at: None,
            delivered_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Delivery status of an SMS message.
///
/// Transitions are owned entirely by the backend; the client only reads and
/// requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SmsStatus {
    Pending,
    Sent,
    Delivered,
    Failed,
    Expired,
}

impl SmsStatus {
    pub const ALL: [SmsStatus; 5] = [
        Self::Pending,
        Self::Sent,
        Self::Delivered,
        Self::Failed,
        Self::Expired,
    ];

    /// Wire token as used in URLs and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Delivered => "DELIVERED",
            Self::Failed => "FAILED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Whether the status is terminal (no further transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Failed | Self::Expired)
    }
}

impl fmt::Display for SmsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SmsStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SENT" => Ok(Self::Sent),
            "DELIVERED" => Ok(Self::Delivered),
            "FAILED" => Ok(Self::Failed),
            "EXPIRED" => Ok(Self::Expired),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown SMS status: {0}")]
pub struct ParseStatusError(pub String);

/// Message priority. Ordinal urgency, not enforced client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SmsPriority {
    Low = 0,
    Normal = 1,
    High = 2,
    Urgent = 3,
}

impl Default for SmsPriority {
    fn default() -> Self {
        Self::Normal
    }
}

impl SmsPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for SmsPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SmsPriority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "NORMAL" => Ok(Self::Normal),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown SMS priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Aggregate delivery count for one status over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsStatistics {
    pub status: SmsStatus,
    pub count: u64,
}

/// Aggregate count per (operator, status) over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorStatistics {
    pub operator_id: i64,
    pub status: SmsStatus,
    pub count: u64,
}

/// Snapshot result of one backend-run load test. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestResult {
    pub total_messages: u64,
    pub concurrent_users: u32,
    pub success_count: u64,
    pub failure_count: u64,
    /// Average latency in milliseconds.
    pub average_latency: u64,
    /// Wall-clock duration of the run in milliseconds.
    pub total_duration: u64,
    /// Messages per second.
    pub throughput: f64,
}

/// Snapshot result of one backend-run stress test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestResult {
    pub max_load: u32,
    /// Requested run duration in seconds.
    pub duration: u32,
    pub total_messages: u64,
    pub success_count: u64,
    pub failure_count: u64,
    /// Average latency in milliseconds.
    pub average_latency: u64,
    /// Peak messages per second observed during the run.
    pub peak_throughput: f64,
}

/// Generic pagination envelope returned by the paginated listings.
///
/// `number` is the 0-based page index; `first == (number == 0)` and
/// `content.len() <= size` hold for every well-formed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
    pub first: bool,
    pub last: bool,
}
