//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and migrations (db)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - PokeAPI client (pokeapi)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod db;
pub mod pokeapi;
pub mod repositories;
pub mod server;
pub mod state;

pub use config::Config;
pub use pokeapi::PokeApiClient;
pub use repositories::*;
pub use state::AppState;
