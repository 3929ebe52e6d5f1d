// Port Layer - Interfaces wired by the frontend

pub mod display_sink;
pub mod id_provider;

// Re-exports
pub use display_sink::{DisplaySink, NullDisplaySink};
pub use id_provider::{IdProvider, SequentialIdProvider};
