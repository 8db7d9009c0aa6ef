//! Repository implementations using SeaORM

pub mod pokemon_repository;

pub use pokemon_repository::SeaOrmPokemonRepository;
