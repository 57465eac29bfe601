//! smsmon — operator console for the SMS delivery monitoring platform
//!
//! Each subcommand maps onto one screen of the monitoring dashboard; running
//! with no subcommand lands on the delivery overview.

use clap::{Parser, Subcommand};
use smsmon_sdk::ApiConfig;
use tracing_subscriber::EnvFilter;

mod render;
mod views;

use views::messages::MessagesCommand;
use views::network_test::NetworkTestCommand;
use views::send::SendArgs;
use views::statistics::StatisticsArgs;

#[derive(Parser)]
#[command(
    name = "smsmon",
    version,
    about = "Operator console for the SMS delivery monitoring platform"
)]
struct Cli {
    /// Backend API base URL
    #[arg(
        long,
        env = "SMS_API_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    api_url: String,

    /// Per-request timeout in seconds (requests wait indefinitely when unset)
    #[arg(long, env = "SMS_API_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Delivery overview: backend health, recent traffic, status breakdown
    Dashboard,
    /// Browse and manage stored messages
    #[command(subcommand)]
    Messages(MessagesCommand),
    /// Submit a new message
    Send(SendArgs),
    /// Delivery and operator statistics over a date range
    Statistics(StatisticsArgs),
    /// Synthetic load and stress tests against the backend
    #[command(subcommand)]
    NetworkTest(NetworkTestCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ApiConfig {
        base_url: cli.api_url,
        request_timeout_secs: cli.timeout_secs,
    };

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => views::dashboard::run(&config).await,
        Command::Messages(command) => views::messages::run(&config, command).await,
        Command::Send(args) => views::send::run(&config, args).await,
        Command::Statistics(args) => views::statistics::run(&config, args).await,
        Command::NetworkTest(command) => views::network_test::run(&config, command).await,
    }
}
