//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// Pokemon data for API responses
///
/// Store metadata (timestamps) is never part of this shape.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct Pokemon {
    pub id: String,
    pub no: i32,
    pub name: String,
}

/// Input for creating a pokemon
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreatePokemonInput {
    pub no: i32,
    pub name: String,
}

/// Input for a partial pokemon update
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdatePokemonInput {
    pub no: Option<i32>,
    pub name: Option<String>,
}

impl UpdatePokemonInput {
    pub fn is_empty(&self) -> bool {
        self.no.is_none() && self.name.is_none()
    }
}

/// Limit/offset window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 10;
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Repository trait for Pokemon entity
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Insert a new pokemon, lowercasing its name
    async fn create(&self, input: CreatePokemonInput) -> Result<Pokemon, DomainError>;

    /// Page through pokemon ordered by `no`
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<Pokemon>, DomainError>;

    /// Resolve a search token by `no`, then store id, then name
    async fn find_one(&self, search: &str) -> Result<Pokemon, DomainError>;

    /// Apply a partial update to the pokemon matched by `search`
    ///
    /// The returned value is the looked-up snapshot with the patch laid over
    /// it; the store is not read back after the write.
    async fn update(&self, search: &str, patch: UpdatePokemonInput)
    -> Result<Pokemon, DomainError>;

    /// Delete a pokemon by store id
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Swap the whole collection for `inputs` in one transaction.
    ///
    /// Returns `(removed, inserted)`. On any failure the previous rows stay.
    async fn replace_all(&self, inputs: Vec<CreatePokemonInput>) -> Result<(u64, u64), DomainError>;
}
