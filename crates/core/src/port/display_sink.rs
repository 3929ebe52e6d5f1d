// Display Sink Port - re-render notifications for the waiting list

use crate::domain::Client;

/// Consumer notified after every effective queue mutation.
///
/// The slice is the post-mutation waiting list in serve order; an empty
/// slice is the "no clients waiting" state and renderers must show it
/// distinctly. The queue itself never calls this - the check-in service
/// does, and only when an operation actually changed the sequence.
pub trait DisplaySink: Send + Sync {
    fn queue_changed(&self, waiting: &[Client]);
}

/// Sink that renders nothing (headless runs and tests).
pub struct NullDisplaySink;

impl DisplaySink for NullDisplaySink {
    fn queue_changed(&self, _waiting: &[Client]) {}
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use std::sync::Mutex;

    use super::DisplaySink;
    use crate::domain::{Client, ClientId};

    /// Records every notification for assertions.
    pub struct RecordingDisplaySink {
        snapshots: Mutex<Vec<Vec<ClientId>>>,
    }

    impl RecordingDisplaySink {
        pub fn new() -> Self {
            Self {
                snapshots: Mutex::new(Vec::new()),
            }
        }

        /// Number of notifications received so far.
        pub fn notifications(&self) -> usize {
            self.snapshots.lock().unwrap().len()
        }

        /// Ticket ids carried by the most recent notification.
        pub fn last_snapshot(&self) -> Option<Vec<ClientId>> {
            self.snapshots.lock().unwrap().last().cloned()
        }
    }

    impl Default for RecordingDisplaySink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DisplaySink for RecordingDisplaySink {
        fn queue_changed(&self, waiting: &[Client]) {
            let ids = waiting.iter().map(Client::id).collect();
            self.snapshots.lock().unwrap().push(ids);
        }
    }
}
