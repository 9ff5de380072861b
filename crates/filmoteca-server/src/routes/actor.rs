//! Actor Routes - Performer Catalog
//!
//! HTTP handlers that delegate to ActorService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{error_response, ApiError};
use crate::models::{ActorResponse, RegisterActorRequest, SearchQuery, UpdateActorRequest};
use crate::AppState;

pub const REGISTERED: &str = "Actor registrado correctamente";
pub const UPDATED: &str = "Actor actualizado correctamente";
pub const DELETED: &str = "Actor eliminado correctamente";

/// Search Actors by name
#[utoipa::path(
    get,
    path = "/actor/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Actors with this name", body = Vec<ActorResponse>),
        (status = 404, description = "No Actor with this name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actor"
)]
pub async fn search_actors(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ActorResponse>>, ApiError> {
    let actors = state
        .actor_service
        .search_by_name(&query.name)
        .await
        .map_err(error_response)?;

    Ok(Json(actors.into_iter().map(ActorResponse::from).collect()))
}

/// Register a new Actor
#[utoipa::path(
    post,
    path = "/actor/register",
    request_body = RegisterActorRequest,
    responses(
        (status = 200, description = "Actor registered", body = String),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actor"
)]
pub async fn register_actor(
    State(state): State<AppState>,
    Json(payload): Json<RegisterActorRequest>,
) -> Result<&'static str, ApiError> {
    state
        .actor_service
        .register(payload.into())
        .await
        .map_err(error_response)?;

    Ok(REGISTERED)
}

/// Update an Actor
#[utoipa::path(
    put,
    path = "/actor/update/{id}",
    params(("id" = i64, Path, description = "Actor ID")),
    request_body = UpdateActorRequest,
    responses(
        (status = 200, description = "Actor updated", body = String),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Actor not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actor"
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateActorRequest>,
) -> Result<&'static str, ApiError> {
    state
        .actor_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(UPDATED)
}

/// Delete an Actor
#[utoipa::path(
    delete,
    path = "/actor/delete/{id}",
    params(("id" = i64, Path, description = "Actor ID")),
    responses(
        (status = 200, description = "Actor deleted", body = String),
        (status = 404, description = "Actor not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Actor"
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state
        .actor_service
        .delete_by_id(id)
        .await
        .map_err(error_response)?;

    Ok(DELETED)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actor/search", get(search_actors))
        .route("/actor/register", post(register_actor))
        .route("/actor/update/:id", put(update_actor))
        .route("/actor/delete/:id", delete(delete_actor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{app, body_json, body_text, send};
    use axum::http::{Method, StatusCode};
    use chrono::{NaiveDate, Utc};
    use filmoteca::{
        Actor, MockActorRepository, MockDirectorRepository, MockMovieRepository, NewActor,
    };
    use mockall::predicate::eq;

    fn actor_app(actors: MockActorRepository) -> Router {
        app(MockMovieRepository::new(), actors, MockDirectorRepository::new())
    }

    fn stored(id: i64, name: &str) -> Actor {
        Actor {
            id,
            name: name.to_string(),
            nationality: "Australian".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1983, 8, 11),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_confirmation() {
        let mut actors = MockActorRepository::new();
        actors
            .expect_insert()
            .withf(|a: &NewActor| {
                a.name == "Chris Hemsworth"
                    && a.nationality == "Australian"
                    && a.date_of_birth == NaiveDate::from_ymd_opt(1983, 8, 11)
            })
            .times(1)
            .returning(|a| Ok(stored(1, &a.name)));

        let response = send(
            actor_app(actors),
            Method::POST,
            "/actor/register",
            Some(r#"{"name":"Chris Hemsworth", "nationality":"Australian", "dateOfBirth":"1983-08-11"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Actor registrado correctamente");
    }

    #[tokio::test]
    async fn test_search_returns_camel_case_records() {
        let mut actors = MockActorRepository::new();
        actors
            .expect_find_by_name()
            .withf(|name| name == "Robert Downey Jr.")
            .times(1)
            .returning(|name| Ok(vec![stored(4, name)]));

        let response = send(
            actor_app(actors),
            Method::GET,
            "/actor/search?name=Robert%20Downey%20Jr.",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["name"], "Robert Downey Jr.");
        assert_eq!(json[0]["dateOfBirth"], "1983-08-11");
    }

    #[tokio::test]
    async fn test_update_returns_confirmation() {
        let mut actors = MockActorRepository::new();
        actors
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(stored(id, "Chris Hemsworth"))));
        actors
            .expect_update()
            .withf(|a: &Actor| a.name == "Chris Evans")
            .times(1)
            .returning(|a| Ok(a.clone()));

        let response = send(
            actor_app(actors),
            Method::PUT,
            "/actor/update/1",
            Some(r#"{"name":"Chris Evans"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Actor actualizado correctamente");
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation() {
        let mut actors = MockActorRepository::new();
        actors.expect_exists_by_id().with(eq(1)).returning(|_| Ok(true));
        actors
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let response = send(actor_app(actors), Method::DELETE, "/actor/delete/1", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Actor eliminado correctamente");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let response = send(
            actor_app(MockActorRepository::new()),
            Method::DELETE,
            "/actor/delete/abc",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_not_found() {
        let mut actors = MockActorRepository::new();
        actors
            .expect_find_by_name()
            .withf(|name| name == "Nadie")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let response = send(actor_app(actors), Method::GET, "/actor/search?name=Nadie", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "No se encontró el actor con nombre 'Nadie'"
        );
    }
}
