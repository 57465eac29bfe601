//! Message submission form.

use chrono::{DateTime, Utc};
use clap::Args;
use smsmon_sdk::display;
use smsmon_sdk::{ApiConfig, SmsApiClient, SmsMessage, SmsPriority};

#[derive(Args)]
pub struct SendArgs {
    /// Sender number
    #[arg(long)]
    pub sender: String,

    /// Recipient number
    #[arg(long)]
    pub recipient: String,

    /// Message body
    #[arg(long)]
    pub message: String,

    /// Priority token (LOW, NORMAL, HIGH, URGENT)
    #[arg(long, default_value = "NORMAL")]
    pub priority: SmsPriority,

    /// Operator to route through
    #[arg(long)]
    pub operator: Option<i64>,

    /// External correlation id (generated when omitted)
    #[arg(long)]
    pub message_id: Option<String>,

    /// Schedule delivery for a future instant (RFC 3339)
    #[arg(long)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

pub async fn run(config: &ApiConfig, args: SendArgs) -> anyhow::Result<()> {
    let client = SmsApiClient::new(config);

    let mut message = SmsMessage::new(args.sender, args.recipient, args.message);
    if let Some(message_id) = args.message_id {
        message.message_id = message_id;
    }
    message.priority = args.priority;
    message.operator_id = args.operator;
    message.scheduled_at = args.scheduled_at;

    let created = client.create(&message).await?;

    println!("Submitted message {}", created.message_id);
    if let Some(id) = created.id {
        println!("Backend id: {id}");
    }
    println!(
        "Status: {}",
        display::status_display_text(created.status.as_str())
    );

    Ok(())
}
