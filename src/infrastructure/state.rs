//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::PokemonRepository;
use crate::infrastructure::{Config, PokeApiClient, SeaOrmPokemonRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Pokemon repository
    pub pokemon_repo: Arc<dyn PokemonRepository>,
    /// Upstream used by the seed endpoint
    pub pokeapi: PokeApiClient,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let pokemon_repo = Arc::new(SeaOrmPokemonRepository::new(db.clone()));
        let pokeapi = PokeApiClient::new(&config.pokeapi_url);

        Self {
            db,
            pokemon_repo,
            pokeapi,
            config,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
