//! Services Layer
//!
//! Use cases that span more than one repository call.

pub mod seed_service;

pub use seed_service::{SeedReport, seed_pokemon};
