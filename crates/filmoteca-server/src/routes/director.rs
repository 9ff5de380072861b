//! Director Routes - Director Catalog
//!
//! HTTP handlers that delegate to DirectorService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{error_response, ApiError};
use crate::models::{DirectorResponse, RegisterDirectorRequest, SearchQuery, UpdateDirectorRequest};
use crate::AppState;

pub const REGISTERED: &str = "Director registrado correctamente";
pub const UPDATED: &str = "Director actualizado correctamente";
pub const DELETED: &str = "Director eliminado correctamente";

/// Search Directors by name
#[utoipa::path(
    get,
    path = "/director/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Directors with this name", body = Vec<DirectorResponse>),
        (status = 404, description = "No Director with this name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Director"
)]
pub async fn search_directors(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<DirectorResponse>>, ApiError> {
    let directors = state
        .director_service
        .search_by_name(&query.name)
        .await
        .map_err(error_response)?;

    Ok(Json(directors.into_iter().map(DirectorResponse::from).collect()))
}

/// Register a new Director
#[utoipa::path(
    post,
    path = "/director/register",
    request_body = RegisterDirectorRequest,
    responses(
        (status = 200, description = "Director registered", body = String),
        (status = 400, description = "Blank or already registered name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Director"
)]
pub async fn register_director(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDirectorRequest>,
) -> Result<&'static str, ApiError> {
    state
        .director_service
        .register(payload.into())
        .await
        .map_err(error_response)?;

    Ok(REGISTERED)
}

/// Update a Director
#[utoipa::path(
    put,
    path = "/director/update/{id}",
    params(("id" = i64, Path, description = "Director ID")),
    request_body = UpdateDirectorRequest,
    responses(
        (status = 200, description = "Director updated", body = String),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Director not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Director"
)]
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDirectorRequest>,
) -> Result<&'static str, ApiError> {
    state
        .director_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(UPDATED)
}

/// Delete a Director
#[utoipa::path(
    delete,
    path = "/director/delete/{id}",
    params(("id" = i64, Path, description = "Director ID")),
    responses(
        (status = 200, description = "Director deleted", body = String),
        (status = 404, description = "Director not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Director"
)]
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state
        .director_service
        .delete_by_id(id)
        .await
        .map_err(error_response)?;

    Ok(DELETED)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/director/search", get(search_directors))
        .route("/director/register", post(register_director))
        .route("/director/update/:id", put(update_director))
        .route("/director/delete/:id", delete(delete_director))
}
