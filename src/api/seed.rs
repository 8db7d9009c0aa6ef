use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::error_response;
use crate::infrastructure::AppState;
use crate::services::seed_pokemon;

#[utoipa::path(
    get,
    path = "/api/v2/seed",
    responses(
        (status = 200, description = "Store replaced with the PokeAPI dex"),
        (status = 502, description = "PokeAPI unavailable")
    )
)]
pub async fn execute_seed(State(state): State<AppState>) -> impl IntoResponse {
    let result = seed_pokemon(
        state.pokemon_repo.as_ref(),
        &state.pokeapi,
        state.config.seed_limit,
    )
    .await;

    match result {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "message": "Seed executed",
                "inserted": report.inserted
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
