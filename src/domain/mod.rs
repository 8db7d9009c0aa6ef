//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, lookup rules and domain error types.

pub mod errors;
pub mod lookup;
pub mod repositories;

pub use errors::DomainError;
pub use lookup::{LookupKey, lookup_keys};
pub use repositories::*;
