pub mod health;
pub mod pokemon;
pub mod seed;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    let v2 = Router::new()
        // Pokemon
        .route(
            "/pokemon",
            get(pokemon::list_pokemon).post(pokemon::create_pokemon),
        )
        .route(
            "/pokemon/:term",
            get(pokemon::get_pokemon)
                .patch(pokemon::update_pokemon)
                .delete(pokemon::delete_pokemon),
        )
        // Seed
        .route("/seed", get(seed::execute_seed));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .nest("/v2", v2)
        .with_state(state)
}

/// Map a domain error to its HTTP status and a `{"error": ...}` body
pub fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } | DomainError::InvalidId(_) | DomainError::Validation(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::External(_) => StatusCode::BAD_GATEWAY,
        DomainError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
