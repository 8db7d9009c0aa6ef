//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Storage diagnostics never travel inside an error value: they are logged
//! where the failure is translated and the caller only sees `Storage`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record matches the search token or delete target (kept verbatim)
    NotFound(String),
    /// A unique key (`no` or `name`) is already taken
    Conflict { key: String, value: String },
    /// The value is not a syntactically valid store id
    InvalidId(String),
    /// Input rejected before reaching the store
    Validation(String),
    /// Upstream service (PokeAPI) failure
    External(String),
    /// Any other persistence failure, detail suppressed
    Storage,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(search) => {
                write!(f, "Pokemon with id, name or no \"{}\" not found", search)
            }
            DomainError::Conflict { key, value } => {
                write!(f, "Pokemon exists in db {{\"{}\":{}}}", key, value)
            }
            DomainError::InvalidId(id) => write!(f, "\"{}\" is not a valid id", id),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
            DomainError::Storage => write!(f, "Storage error - check server logs"),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer for reads)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        tracing::error!("Storage failure: {}", e);
        DomainError::Storage
    }
}
