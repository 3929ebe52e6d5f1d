//! Check-in queue - tier-ordered waiting list.
//!
//! Backed by a `Vec` kept sorted ascending by tier; clients sharing a tier
//! stay in arrival order. Expected cardinality is a physical waiting room,
//! so the linear shifts on insert and serve are acceptable; a binary heap
//! keyed by (tier, arrival sequence) is the upgrade path if that ever
//! stops being true.

use crate::domain::client::{Client, ClientId};

/// Priority queue of waiting clients.
///
/// Between operations the sequence is sorted ascending by tier, stable on
/// ties, and every queued ticket id is distinct. All operations run to
/// completion; there is no partial state to observe.
#[derive(Debug, Default)]
pub struct CheckInQueue {
    waiting: Vec<Client>,
}

impl CheckInQueue {
    /// Empty queue. There is one per process, created at startup.
    pub fn new() -> Self {
        Self {
            waiting: Vec::new(),
        }
    }

    /// Insert a client, keeping the tier ordering.
    ///
    /// The insertion point is after every queued client whose tier is
    /// less than or equal to the new one, which preserves arrival order
    /// within a tier. O(log n) search plus an O(n) shift.
    pub fn enqueue(&mut self, client: Client) {
        let at = self
            .waiting
            .partition_point(|queued| queued.tier() <= client.tier());
        self.waiting.insert(at, client);
    }

    /// Remove and return the next client to serve: lowest tier value,
    /// earliest arrival among ties. `None` when nobody is waiting - an
    /// empty queue is a normal state, not an error. O(n) shift.
    pub fn serve_next(&mut self) -> Option<Client> {
        if self.waiting.is_empty() {
            None
        } else {
            Some(self.waiting.remove(0))
        }
    }

    /// Drop the client holding the given ticket id.
    ///
    /// Returns whether a client was actually removed; an unknown id is an
    /// expected case (already served, or cancelled twice) and leaves the
    /// sequence untouched. Relative order of the others is preserved. O(n).
    pub fn remove(&mut self, id: ClientId) -> bool {
        let before = self.waiting.len();
        self.waiting.retain(|client| client.id() != id);
        self.waiting.len() != before
    }

    /// Number of waiting clients. O(1).
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Waiting clients in serve order (read-only view for rendering).
    pub fn clients(&self) -> &[Client] {
        &self.waiting
    }
}
