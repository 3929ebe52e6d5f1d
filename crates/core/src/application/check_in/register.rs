// Register Use Case - the client record factory

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Result};
use crate::domain::{Classification, Client};
use crate::port::IdProvider;

/// Raw check-in input, as collected by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub classification: String,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classification: classification.into(),
        }
    }
}

/// Validate the request and build the client record.
///
/// The name must be non-empty after trimming and the classification must
/// belong to the closed label set. The ticket id is drawn only after both
/// fields have validated, so a rejected request never consumes a counter
/// value.
pub fn execute(ids: &dyn IdProvider, req: RegisterRequest) -> Result<Client> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName);
    }
    let classification: Classification = req.classification.parse()?;

    let id = ids.next_id();
    Ok(Client::new(id, name.to_string(), classification))
}
