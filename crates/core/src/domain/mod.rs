// Domain Layer - Pure business logic and entities

pub mod client;
pub mod error;
pub mod queue;

// Re-exports
pub use client::{Classification, Client, ClientId, Tier};
pub use error::DomainError;
pub use queue::CheckInQueue;
