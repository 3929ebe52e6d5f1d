//! Frontdesk - interactive check-in desk
//!
//! Single-process terminal frontend for the check-in engine: collects
//! check-ins, serves and cancels tickets, and keeps the waiting list
//! rendered between operations. Logs go to stderr so the desk output on
//! stdout stays readable.

mod clock;
mod display;
mod session;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use frontdesk_core::application::CheckInService;
use frontdesk_core::port::SequentialIdProvider;

use crate::display::TerminalDisplaySink;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Client check-in queue for the service desk", long_about = None)]
#[command(version)]
struct Cli {
    /// Log output format: "pretty" or "json"
    #[arg(long, env = "FRONTDESK_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("frontdesk_core=info,frontdesk=info"))
        .expect("Failed to create env filter");

    match cli.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    info!("Frontdesk v{} starting", VERSION);

    // Wire the ports into the service (composition root).
    let ids = Arc::new(SequentialIdProvider::new());
    let display = Arc::new(TerminalDisplaySink::new());
    let service = CheckInService::new(ids, display);

    session::run(service).await
}
