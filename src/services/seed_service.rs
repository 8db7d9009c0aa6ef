//! Seed Service - Replaces the store contents with the PokeAPI dex

use crate::domain::{DomainError, PokemonRepository};
use crate::infrastructure::PokeApiClient;

/// Outcome of a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: u64,
    pub inserted: u64,
}

/// Fetch `limit` pokemon from PokeAPI, wipe the store and insert them.
///
/// The fetch happens first and the swap is transactional, so neither an
/// upstream failure nor a rejected insert leaves the store modified.
pub async fn seed_pokemon(
    repo: &dyn PokemonRepository,
    pokeapi: &PokeApiClient,
    limit: u32,
) -> Result<SeedReport, DomainError> {
    let pokemon = pokeapi.fetch_pokemon(limit).await?;
    tracing::info!("Fetched {} pokemon from PokeAPI", pokemon.len());

    let (removed, inserted) = repo.replace_all(pokemon).await?;

    tracing::info!("Seed executed: removed {}, inserted {}", removed, inserted);
    Ok(SeedReport { removed, inserted })
}
