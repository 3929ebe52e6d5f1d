//! Waiting-list rendering for the terminal.
//!
//! The operator sees the ticket id next to each name; `cancel <id>` is
//! how a rendered row maps back to a queue entry.

use colored::Colorize;
use tabled::{Table, Tabled};

use frontdesk_core::domain::{Classification, Client};
use frontdesk_core::port::DisplaySink;

/// Human label for a classification, as announced to waiting clients.
pub fn classification_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Special => "Elderly / Special Condition",
        Classification::Vip => "VIP Client",
        Classification::Normal => "General Client",
    }
}

#[derive(Tabled)]
struct WaitingRow {
    ticket: u64,
    name: String,
    classification: &'static str,
    tier: u8,
}

impl WaitingRow {
    fn from_client(client: &Client) -> Self {
        Self {
            ticket: client.id(),
            name: client.name().to_string(),
            classification: classification_label(client.classification()),
            tier: client.tier().level(),
        }
    }
}

/// Render the waiting list: running count header plus one row per client
/// in serve order. The empty queue gets its own placeholder.
pub fn render_waiting(waiting: &[Client]) -> String {
    let header = format!("Waiting clients ({})", waiting.len());
    if waiting.is_empty() {
        return format!("{}\nNo clients waiting.", header.bold());
    }

    let rows: Vec<WaitingRow> = waiting.iter().map(WaitingRow::from_client).collect();
    let table = Table::new(rows).to_string();
    format!("{}\n{}", header.bold(), table)
}

/// Display sink that repaints the waiting list after every mutation.
pub struct TerminalDisplaySink;

impl TerminalDisplaySink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalDisplaySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TerminalDisplaySink {
    fn queue_changed(&self, waiting: &[Client]) {
        println!("\n{}", render_waiting(waiting));
    }
}
