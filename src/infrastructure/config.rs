use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub default_limit: u64,
    pub pokeapi_url: String,
    pub seed_limit: u32,
    pub seed_on_start: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://pokedex.db?mode=rwc".to_string(),
            port: 3000,
            default_limit: 10,
            pokeapi_url: "https://pokeapi.co/api/v2".to_string(),
            seed_limit: 650,
            seed_on_start: false,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            default_limit: env::var("DEFAULT_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .filter(|l| *l > 0)
                .unwrap_or(defaults.default_limit),
            pokeapi_url: env::var("POKEAPI_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.pokeapi_url),
            seed_limit: env::var("SEED_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.seed_limit),
            seed_on_start: env::var("SEED_ON_START")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        }
    }
}
