//! PokeAPI client used to seed the store

use serde::Deserialize;

use crate::domain::{CreatePokemonInput, DomainError};

#[derive(Debug, Deserialize)]
struct PokeApiListResponse {
    results: Vec<PokeApiEntry>,
}

#[derive(Debug, Deserialize)]
struct PokeApiEntry {
    name: String,
    url: String,
}

#[derive(Clone, Debug)]
pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the first `limit` entries of the national dex
    pub async fn fetch_pokemon(&self, limit: u32) -> Result<Vec<CreatePokemonInput>, DomainError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::External(format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "PokeAPI returned status: {}",
                resp.status()
            )));
        }

        let parsed: PokeApiListResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::External(format!("Failed to parse JSON: {}", e)))?;

        parsed
            .results
            .into_iter()
            .map(|entry| {
                let no = dex_number(&entry.url).ok_or_else(|| {
                    DomainError::External(format!("No dex number in url {}", entry.url))
                })?;
                Ok(CreatePokemonInput {
                    no,
                    name: entry.name,
                })
            })
            .collect()
    }
}

/// `https://pokeapi.co/api/v2/pokemon/25/` -> 25
fn dex_number(url: &str) -> Option<i32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::dex_number;

    #[test]
    fn dex_number_from_resource_url() {
        assert_eq!(dex_number("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(dex_number("https://pokeapi.co/api/v2/pokemon/151"), Some(151));
        assert_eq!(dex_number("https://pokeapi.co/api/v2/pokemon/"), None);
    }
}
