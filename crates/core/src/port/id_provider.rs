// Ticket Id Provider Port

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ClientId;

/// Ticket id source (allows deterministic ids in tests).
///
/// Ids are issued monotonically and never reused, even after the holder
/// leaves the queue. The id must be drawn only after validation has
/// passed: a rejected registration consumes no value.
pub trait IdProvider: Send + Sync {
    /// Issue the next ticket id.
    fn next_id(&self) -> ClientId;
}

/// Process-wide sequential provider (production). The first issued id is 1.
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> ClientId {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let ids = SequentialIdProvider::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_independent_providers_do_not_share_state() {
        let a = SequentialIdProvider::new();
        let b = SequentialIdProvider::new();
        assert_eq!(a.next_id(), 1);
        assert_eq!(b.next_id(), 1);
    }
}
