use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::infrastructure::AppState;
use pokedex::services::seed_pokemon;
use pokedex::{config, db, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    let state = AppState::new(db, config);

    if state.config.seed_on_start {
        tracing::info!("Seeding pokemon from {}...", state.config.pokeapi_url);
        if let Err(e) = seed_pokemon(
            state.pokemon_repo.as_ref(),
            &state.pokeapi,
            state.config.seed_limit,
        )
        .await
        {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    if let Err(e) = server::start_server(state).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
