// Application Layer - Use Cases

pub mod check_in;

// Re-exports
pub use check_in::{CheckInService, RegisterRequest};
