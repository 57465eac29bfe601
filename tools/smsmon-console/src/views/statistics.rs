//! Delivery and operator statistics over a date range.

use chrono::{DateTime, Duration, Utc};
use clap::Args;
use smsmon_sdk::{ApiConfig, SmsApiClient};

use crate::render;

#[derive(Args)]
pub struct StatisticsArgs {
    /// Days back from now
    #[arg(long, default_value_t = 7, conflicts_with_all = ["start", "end"])]
    pub days: i64,

    /// Range start (RFC 3339)
    #[arg(long, requires = "end")]
    pub start: Option<DateTime<Utc>>,

    /// Range end (RFC 3339)
    #[arg(long, requires = "start")]
    pub end: Option<DateTime<Utc>>,
}

impl StatisticsArgs {
    fn range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                let end = Utc::now();
                (end - Duration::days(self.days), end)
            }
        }
    }
}

pub async fn run(config: &ApiConfig, args: StatisticsArgs) -> anyhow::Result<()> {
    let client = SmsApiClient::new(config);
    let (start, end) = args.range();

    println!(
        "Statistics from {} to {}",
        start.to_rfc3339(),
        end.to_rfc3339()
    );

    let delivery = client.delivery_statistics(start, end).await?;
    println!();
    println!("Delivery by status:");
    print!("{}", render::delivery_stats_table(&delivery));

    let operators = client.operator_statistics(start, end).await?;
    println!();
    println!("Delivery by operator:");
    print!("{}", render::operator_stats_table(&operators));

    Ok(())
}
