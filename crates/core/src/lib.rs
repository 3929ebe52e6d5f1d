// Frontdesk Core - Domain Logic & Ports
// NO infrastructure dependencies: the terminal frontend is wired in
// through the port traits, never the other way around.

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
