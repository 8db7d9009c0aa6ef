//! Pokemon API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::api::error_response;
use crate::domain::{CreatePokemonInput, DomainError, Pagination, Pokemon, UpdatePokemonInput};
use crate::infrastructure::AppState;

const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

/// Request DTO for creating a pokemon
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePokemonRequest {
    pub no: i32,
    pub name: String,
}

impl CreatePokemonRequest {
    fn validate(&self) -> Result<(), DomainError> {
        validate_no(self.no)?;
        validate_name(&self.name)
    }
}

/// Request DTO for partial updates; every field is optional
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePokemonRequest {
    pub no: Option<i32>,
    pub name: Option<String>,
}

impl UpdatePokemonRequest {
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(no) = self.no {
            validate_no(no)?;
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page size, defaults to the configured limit
    pub limit: Option<u64>,
    /// Records to skip
    pub offset: Option<u64>,
}

fn validate_no(no: i32) -> Result<(), DomainError> {
    if no < 1 {
        return Err(DomainError::Validation("no must be a positive integer".to_string()));
    }
    Ok(())
}

fn validate_pagination(pagination: &Pagination) -> Result<(), DomainError> {
    if pagination.limit == 0 {
        return Err(DomainError::Validation("limit must be greater than 0".to_string()));
    }
    if pagination.limit > MAX_PAGE_VALUE || pagination.offset > MAX_PAGE_VALUE {
        return Err(DomainError::Validation(format!(
            "limit and offset must not exceed {}",
            MAX_PAGE_VALUE
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/v2/pokemon",
    request_body = CreatePokemonRequest,
    responses(
        (status = 201, description = "Pokemon created", body = Pokemon),
        (status = 400, description = "Invalid input or duplicate no/name")
    )
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    Json(payload): Json<CreatePokemonRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return error_response(e);
    }

    let input = CreatePokemonInput {
        no: payload.no,
        name: payload.name,
    };

    match state.pokemon_repo.create(input).await {
        Ok(pokemon) => (StatusCode::CREATED, Json(pokemon)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/v2/pokemon",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pokemon ordered by no", body = [Pokemon])
    )
)]
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> impl IntoResponse {
    let pagination = Pagination {
        limit: query.limit.unwrap_or(state.config.default_limit),
        offset: query.offset.unwrap_or(0),
    };

    if let Err(e) = validate_pagination(&pagination) {
        return error_response(e);
    }

    match state.pokemon_repo.find_all(pagination).await {
        Ok(pokemon) => (StatusCode::OK, Json(pokemon)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/v2/pokemon/{term}",
    params(("term" = String, Path, description = "Dex number, id or name")),
    responses(
        (status = 200, description = "Pokemon found", body = Pokemon),
        (status = 404, description = "No pokemon matches the term")
    )
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> impl IntoResponse {
    match state.pokemon_repo.find_one(&term).await {
        Ok(pokemon) => (StatusCode::OK, Json(pokemon)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v2/pokemon/{term}",
    params(("term" = String, Path, description = "Dex number, id or name")),
    request_body = UpdatePokemonRequest,
    responses(
        (status = 200, description = "Pokemon updated", body = Pokemon),
        (status = 400, description = "Invalid input or duplicate no/name"),
        (status = 404, description = "No pokemon matches the term")
    )
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Json(payload): Json<UpdatePokemonRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return error_response(e);
    }

    let patch = UpdatePokemonInput {
        no: payload.no,
        name: payload.name,
    };

    match state.pokemon_repo.update(&term, patch).await {
        Ok(pokemon) => (StatusCode::OK, Json(pokemon)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v2/pokemon/{id}",
    params(("id" = String, Path, description = "Store id")),
    responses(
        (status = 200, description = "Pokemon deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No pokemon with this id")
    )
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.pokemon_repo.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Pokemon deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
