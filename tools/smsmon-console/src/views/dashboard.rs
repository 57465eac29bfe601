//! Delivery overview: backend health, recent traffic, status breakdown.

use smsmon_sdk::{ApiConfig, ListParams, SmsApiClient, SmsMessage, SmsStatus};
use tracing::warn;

use crate::render;

/// Number of recent messages shown on the overview.
const RECENT_PAGE_SIZE: u32 = 10;

pub async fn run(config: &ApiConfig) -> anyhow::Result<()> {
    let client = SmsApiClient::new(config);

    // Health is advisory; the overview still renders when the probe fails.
    match client.health_check().await {
        Ok(body) => println!("Backend: {body}"),
        Err(e) => warn!(error = %e, "Health check failed"),
    }

    let page = client
        .list_all(&ListParams {
            size: RECENT_PAGE_SIZE,
            ..Default::default()
        })
        .await?;

    let counts = StatusCounts::from_messages(&page.content);

    println!();
    println!("Total messages: {}", page.total_elements);
    println!();
    print!("{}", render::bar_chart(&counts.chart_rows(), 40));
    println!();
    println!("Recent messages:");
    print!("{}", render::message_table(&page.content));

    Ok(())
}

/// Per-status counts over the currently loaded page, not the full dataset.
///
/// Expired is tracked in the model but excluded from the overview chart.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub delivered: u64,
    pub sent: u64,
    pub pending: u64,
    pub failed: u64,
}

impl StatusCounts {
    pub fn from_messages(messages: &[SmsMessage]) -> Self {
        let mut counts = Self::default();
        for message in messages {
            match message.status {
                SmsStatus::Delivered => counts.delivered += 1,
                SmsStatus::Sent => counts.sent += 1,
                SmsStatus::Pending => counts.pending += 1,
                SmsStatus::Failed => counts.failed += 1,
                SmsStatus::Expired => {}
            }
        }
        counts
    }

    /// Chart rows in fixed category order.
    pub fn chart_rows(&self) -> [(&'static str, u64); 4] {
        [
            ("Delivered", self.delivered),
            ("Sent", self.sent),
            ("Pending", self.pending),
            ("Failed", self.failed),
        ]
    }
}
