// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("client name is required and must be non-empty text")]
    EmptyName,

    #[error("unknown client classification: {0}")]
    UnknownClassification(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
