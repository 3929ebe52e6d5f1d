// Client Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Ticket id. Positive, issued monotonically, never reused - even after
/// the client has been served or cancelled.
pub type ClientId = u64;

/// Client-facing category label (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Special,
    Vip,
    Normal,
}

impl Classification {
    /// Tier derived from the classification. Fixed mapping: every special
    /// client outranks every VIP, every VIP outranks every general client.
    pub fn tier(self) -> Tier {
        match self {
            Classification::Special => Tier::High,
            Classification::Vip => Tier::Medium,
            Classification::Normal => Tier::Low,
        }
    }

    /// Canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Special => "special",
            Classification::Vip => "vip",
            Classification::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = DomainError;

    // "especial" is the legacy spelling of the special label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "special" | "especial" => Ok(Classification::Special),
            "vip" => Ok(Classification::Vip),
            "normal" => Ok(Classification::Normal),
            other => Err(DomainError::UnknownClassification(other.to_string())),
        }
    }
}

/// Priority tier (lower value = served first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Tier {
    /// Numeric level; 1 is the highest precedence.
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// A checked-in client.
///
/// Immutable after construction: the tier is derived from the
/// classification when the record is built and never changes afterwards.
/// Records are not `Clone` and only the register use case constructs
/// them, so a ticket id exists in at most one record.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Client {
    id: ClientId,
    name: String,
    classification: Classification,
    tier: Tier,
}

impl Client {
    /// Build a record from already-validated parts.
    ///
    /// Callers outside the crate go through
    /// `application::check_in::register`, which owns validation and ticket
    /// id issuance.
    pub(crate) fn new(id: ClientId, name: String, classification: Classification) -> Self {
        Self {
            id,
            name,
            classification,
            tier: classification.tier(),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}
