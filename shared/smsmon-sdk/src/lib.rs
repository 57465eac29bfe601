//! SMS Monitoring SDK
//!
//! Typed client for the SMS delivery monitoring backend:
//! - Wire types shared with the REST API (`types`)
//! - `SmsApiClient` for message management and delivery statistics
//! - `NetworkTestClient` for synthetic load/stress runs
//! - Pure display and formatting helpers for operator tooling (`display`)

pub mod client;
pub mod config;
pub mod display;
pub mod error;
mod http;
pub mod simulation;
pub mod types;


pub use client::{ListParams, PageParams, SmsApiClient, SortDir};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use simulation::{LoadTestParams, NetworkTestClient, StressTestParams};
pub use types::{
    LoadTestResult, OperatorStatistics, PageResponse, SmsMessage, SmsPriority, SmsStatistics,
    SmsStatus, StressTestResult,
};
