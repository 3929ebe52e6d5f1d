//! Interactive check-in session.
//!
//! One operator, one terminal: commands arrive on stdin, the waiting
//! list repaints after every change, and the prompt carries the elapsed
//! session time, redrawn once per second.

use std::io::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use frontdesk_core::application::{CheckInService, RegisterRequest};
use frontdesk_core::domain::ClientId;

use crate::clock::SessionClock;
use crate::display;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    CheckIn { classification: String, name: String },
    Next,
    Cancel { id: ClientId },
    List,
    Help,
    Quit,
}

/// Parse one input line. Blank lines are a no-op, malformed input gets
/// a usage string back. The name is the rest of the line, so spaces
/// survive without quoting.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "checkin" | "c" => {
            let (classification, name) = match rest.split_once(char::is_whitespace) {
                Some((classification, name)) => (classification, name.trim()),
                None => (rest, ""),
            };
            if classification.is_empty() || name.is_empty() {
                return Err("usage: checkin <special|vip|normal> <name>".to_string());
            }
            Ok(Some(Command::CheckIn {
                classification: classification.to_string(),
                name: name.to_string(),
            }))
        }
        "next" | "n" => Ok(Some(Command::Next)),
        "cancel" => {
            let id = rest
                .parse::<ClientId>()
                .map_err(|_| "usage: cancel <ticket-id>".to_string())?;
            Ok(Some(Command::Cancel { id }))
        }
        "list" | "l" => Ok(Some(Command::List)),
        "help" | "?" => Ok(Some(Command::Help)),
        "quit" | "q" | "exit" => Ok(Some(Command::Quit)),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

/// Returns false when the session should end.
fn handle_command(service: &mut CheckInService, command: Command) -> bool {
    match command {
        Command::CheckIn {
            classification,
            name,
        } => {
            match service.register(RegisterRequest::new(name, classification)) {
                Ok(client) => {
                    let id = client.id();
                    let name = client.name().to_string();
                    let label = display::classification_label(client.classification());
                    service.enqueue(client);
                    println!(
                        "{} Ticket {} issued for {} ({}).",
                        "✓".green().bold(),
                        id,
                        name,
                        label
                    );
                }
                Err(e) => eprintln!("{} {}", "✗".red().bold(), e),
            }
            true
        }
        Command::Next => {
            match service.serve_next() {
                Some(client) => println!(
                    "{} Now serving: {} (ticket {}).",
                    "✓".green().bold(),
                    client.name(),
                    client.id()
                ),
                None => println!("{}", "No clients waiting.".yellow()),
            }
            true
        }
        Command::Cancel { id } => {
            if service.cancel(id) {
                println!("{} Ticket {} cancelled.", "✓".green().bold(), id);
            } else {
                eprintln!("{} No waiting client holds ticket {}.", "✗".red().bold(), id);
            }
            true
        }
        Command::List => {
            println!("{}", display::render_waiting(service.waiting()));
            true
        }
        Command::Help => {
            print_help();
            true
        }
        Command::Quit => {
            println!("Goodbye.");
            false
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  checkin <special|vip|normal> <name>   issue a ticket and join the queue");
    println!("  next                                  serve the first client in line");
    println!("  cancel <ticket-id>                    remove a waiting client");
    println!("  list                                  show the waiting list");
    println!("  help                                  show this message");
    println!("  quit                                  leave");
}

fn print_prompt(clock: &SessionClock) -> Result<()> {
    let mut out = std::io::stdout();
    write!(out, "\r[{}] frontdesk> ", clock.elapsed_label())?;
    out.flush()?;
    Ok(())
}

pub async fn run(mut service: CheckInService) -> Result<()> {
    println!("{}", format!("Frontdesk v{}", crate::VERSION).bold());
    println!("Type 'help' for the command list.\n");
    println!("{}", display::render_waiting(service.waiting()));

    let clock = SessionClock::start();
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    print_prompt(&clock)?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read from stdin")? {
                    Some(line) => {
                        match parse_command(&line) {
                            Ok(Some(command)) => {
                                if !handle_command(&mut service, command) {
                                    break;
                                }
                            }
                            Ok(None) => {}
                            Err(usage) => eprintln!("{}", usage.yellow()),
                        }
                        print_prompt(&clock)?;
                    }
                    None => {
                        // stdin closed, nothing more to read
                        println!();
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                print_prompt(&clock)?;
            }
            _ = &mut shutdown => {
                println!();
                info!("ctrl-c received, shutting down");
                break;
            }
        }
    }

    info!(
        waiting = service.waiting_count(),
        session = %clock.elapsed_label(),
        "session closed"
    );
    Ok(())
}
