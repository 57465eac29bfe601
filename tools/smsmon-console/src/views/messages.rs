//! Message browser: listing, lookup, status transitions, deletion.

use anyhow::bail;
use clap::{Args, Subcommand};
use smsmon_sdk::display;
use smsmon_sdk::{ApiConfig, ListParams, PageParams, SmsApiClient, SmsMessage, SmsStatus, SortDir};

use crate::render;

#[derive(Subcommand)]
pub enum MessagesCommand {
    /// Page through messages, optionally scoped to an operator or a status
    List(ListArgs),
    /// Show a single message
    Get(GetArgs),
    /// Request a status transition
    SetStatus {
        id: i64,
        /// New status token (PENDING, SENT, DELIVERED, FAILED, EXPIRED)
        status: SmsStatus,
    },
    /// Delete a message
    Delete { id: i64 },
}

#[derive(Args)]
pub struct ListArgs {
    /// 0-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    #[arg(long, default_value_t = 20)]
    pub size: u32,

    /// Sort field for the unscoped listing
    #[arg(long, default_value = "createdAt")]
    pub sort_by: String,

    #[arg(long, default_value = "desc")]
    pub sort_dir: SortDir,

    /// Only messages routed through this operator
    #[arg(long)]
    pub operator: Option<i64>,

    /// Only messages in this status (unpaginated)
    #[arg(long, conflicts_with = "operator")]
    pub status: Option<SmsStatus>,
}

#[derive(Args)]
pub struct GetArgs {
    /// Backend-assigned numeric id
    #[arg(required_unless_present = "message_id", conflicts_with = "message_id")]
    pub id: Option<i64>,

    /// Look up by external message id instead
    #[arg(long)]
    pub message_id: Option<String>,
}

pub async fn run(config: &ApiConfig, command: MessagesCommand) -> anyhow::Result<()> {
    let client = SmsApiClient::new(config);

    match command {
        MessagesCommand::List(args) => list(&client, args).await,
        MessagesCommand::Get(args) => get(&client, args).await,
        MessagesCommand::SetStatus { id, status } => {
            let message = client.update_status(id, status).await?;
            println!(
                "Message {} is now {}",
                id,
                display::status_display_text(message.status.as_str())
            );
            Ok(())
        }
        MessagesCommand::Delete { id } => {
            client.delete(id).await?;
            println!("Message {id} deleted");
            Ok(())
        }
    }
}

async fn list(client: &SmsApiClient, args: ListArgs) -> anyhow::Result<()> {
    if let Some(status) = args.status {
        let messages = client.list_by_status(status).await?;
        print!("{}", render::message_table(&messages));
        println!();
        println!(
            "{} messages in {}",
            messages.len(),
            display::status_display_text(status.as_str())
        );
        return Ok(());
    }

    let page = match args.operator {
        Some(operator_id) => {
            client
                .list_by_operator(
                    operator_id,
                    &PageParams {
                        page: args.page,
                        size: args.size,
                    },
                )
                .await?
        }
        None => {
            client
                .list_all(&ListParams {
                    page: args.page,
                    size: args.size,
                    sort_by: args.sort_by,
                    sort_dir: args.sort_dir,
                })
                .await?
        }
    };

    print!("{}", render::message_table(&page.content));
    println!();
    println!(
        "Page {}/{} ({} total)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    );
    Ok(())
}

async fn get(client: &SmsApiClient, args: GetArgs) -> anyhow::Result<()> {
    let message = match (args.id, args.message_id) {
        (Some(id), _) => client.get_by_id(id).await?,
        (None, Some(message_id)) => client.get_by_message_id(&message_id).await?,
        (None, None) => bail!("an id or --message-id is required"),
    };

    print_message(&message);
    Ok(())
}

fn print_message(message: &SmsMessage) {
    println!("Message {}", message.message_id);
    if let Some(id) = message.id {
        println!("  Backend id:   {id}");
    }
    if let Some(operator_id) = message.operator_id {
        println!("  Operator:     {operator_id}");
    }
    println!("  Sender:       {}", message.sender_number);
    println!("  Recipient:    {}", message.recipient_number);
    println!(
        "  Status:       {}",
        display::status_display_text(message.status.as_str())
    );
    println!(
        "  Priority:     {}",
        display::priority_display_text(message.priority.as_str())
    );
    println!("  Content:      {}", message.message_content);

    for (label, stamp) in [
        ("Scheduled at", message.scheduled_at),
        ("Sent at", message.sent_at),
        ("Delivered at", message.delivered_at),
        ("Created at", message.created_at),
        ("Updated at", message.updated_at),
    ] {
        if let Some(stamp) = stamp {
            println!("  {:<13} {}", format!("{label}:"), stamp.to_rfc3339());
        }
    }
}
