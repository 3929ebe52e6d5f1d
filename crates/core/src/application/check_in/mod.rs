// Check-In Service - use cases around the waiting queue

pub mod register;

pub use register::RegisterRequest;

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{CheckInQueue, Client, ClientId};
use crate::error::Result;
use crate::port::{DisplaySink, IdProvider};

/// Front-of-house service: owns the waiting queue and pushes a re-render
/// through the display sink after every effective mutation.
///
/// All mutating operations take `&mut self` and run to completion: one
/// session loop owns the service, so operations never interleave.
pub struct CheckInService {
    queue: CheckInQueue,
    ids: Arc<dyn IdProvider>,
    display: Arc<dyn DisplaySink>,
}

impl CheckInService {
    /// Start with an empty queue.
    pub fn new(ids: Arc<dyn IdProvider>, display: Arc<dyn DisplaySink>) -> Self {
        Self {
            queue: CheckInQueue::new(),
            ids,
            display,
        }
    }

    /// Build a client record without queueing it (validation + ticket id).
    pub fn register(&self, req: RegisterRequest) -> Result<Client> {
        Ok(register::execute(self.ids.as_ref(), req)?)
    }

    /// Queue an already-registered client.
    pub fn enqueue(&mut self, client: Client) {
        info!(
            client_id = client.id(),
            tier = ?client.tier(),
            "client queued"
        );
        self.queue.enqueue(client);
        self.display.queue_changed(self.queue.clients());
    }

    /// Register and queue in one step. Returns the issued ticket id.
    pub fn check_in(&mut self, req: RegisterRequest) -> Result<ClientId> {
        let client = self.register(req)?;
        let id = client.id();
        self.enqueue(client);
        Ok(id)
    }

    /// Serve the next client: lowest tier, earliest arrival among ties.
    ///
    /// `None` when nobody is waiting; the display is refreshed only when a
    /// client was actually served.
    pub fn serve_next(&mut self) -> Option<Client> {
        let served = self.queue.serve_next();
        if let Some(client) = &served {
            info!(client_id = client.id(), name = client.name(), "client served");
            self.display.queue_changed(self.queue.clients());
        }
        served
    }

    /// Cancel the ticket with the given id.
    ///
    /// `false` when no waiting client holds it (already served, or
    /// cancelled twice) - expected, not an error. The display is refreshed
    /// only when a removal actually occurred.
    pub fn cancel(&mut self, id: ClientId) -> bool {
        let removed = self.queue.remove(id);
        if removed {
            info!(client_id = id, "ticket cancelled");
            self.display.queue_changed(self.queue.clients());
        } else {
            debug!(client_id = id, "cancel requested for unknown ticket");
        }
        removed
    }

    /// Number of waiting clients.
    pub fn waiting_count(&self) -> usize {
        self.queue.len()
    }

    /// Waiting clients in serve order.
    pub fn waiting(&self) -> &[Client] {
        self.queue.clients()
    }
}
