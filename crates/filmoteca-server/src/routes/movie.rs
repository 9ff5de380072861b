//! Movie Routes - Film Catalog
//!
//! HTTP handlers that delegate to MovieService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{error_response, ApiError};
use crate::models::{MovieResponse, RegisterMovieRequest, SearchQuery, UpdateMovieRequest};
use crate::AppState;

pub const REGISTERED: &str = "Película registrada correctamente";
pub const UPDATED: &str = "Película actualizada correctamente";
pub const DELETED: &str = "Película eliminada correctamente";

/// Search Movies by name
#[utoipa::path(
    get,
    path = "/movie/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Movies with this name", body = Vec<MovieResponse>),
        (status = 404, description = "No Movie with this name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movie"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = state
        .movie_service
        .search_by_name(&query.name)
        .await
        .map_err(error_response)?;

    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Register a new Movie
#[utoipa::path(
    post,
    path = "/movie/register",
    request_body = RegisterMovieRequest,
    responses(
        (status = 200, description = "Movie registered", body = String),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movie"
)]
pub async fn register_movie(
    State(state): State<AppState>,
    Json(payload): Json<RegisterMovieRequest>,
) -> Result<&'static str, ApiError> {
    state
        .movie_service
        .register(payload.into())
        .await
        .map_err(error_response)?;

    Ok(REGISTERED)
}

/// Update a Movie
#[utoipa::path(
    put,
    path = "/movie/update/{id}",
    params(("id" = i64, Path, description = "Movie ID")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = String),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movie"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<&'static str, ApiError> {
    state
        .movie_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(UPDATED)
}

/// Delete a Movie
#[utoipa::path(
    delete,
    path = "/movie/delete/{id}",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = String),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Movie"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state
        .movie_service
        .delete_by_id(id)
        .await
        .map_err(error_response)?;

    Ok(DELETED)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie/search", get(search_movies))
        .route("/movie/register", post(register_movie))
        .route("/movie/update/:id", put(update_movie))
        .route("/movie/delete/:id", delete(delete_movie))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{app, body_json, body_text, send};
    use axum::http::{Method, StatusCode};
    use chrono::Utc;
    use filmoteca::{Movie, MockActorRepository, MockDirectorRepository, MockMovieRepository};
    use mockall::predicate::eq;

    fn movie_app(movies: MockMovieRepository) -> Router {
        app(movies, MockActorRepository::new(), MockDirectorRepository::new())
    }

    fn stored(id: i64, name: &str) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            release_year: Some(2011),
            genre: Some("Action".to_string()),
            duration_minutes: Some(115),
            synopsis: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_confirmation() {
        let mut movies = MockMovieRepository::new();
        movies.expect_exists_by_name().never();
        movies.expect_insert().times(1).returning(|m| {
            Ok(Movie {
                id: 1,
                name: m.name.clone(),
                release_year: m.release_year,
                genre: m.genre.clone(),
                duration_minutes: m.duration_minutes,
                synopsis: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

        let response = send(
            movie_app(movies),
            Method::POST,
            "/movie/register",
            Some(r#"{"name":"Thor","releaseYear":2011,"genre":"Action","durationMinutes":115}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Película registrada correctamente");
    }

    #[tokio::test]
    async fn test_register_without_name_is_unprocessable() {
        let mut movies = MockMovieRepository::new();
        movies.expect_insert().never();

        let response = send(
            movie_app(movies),
            Method::POST,
            "/movie/register",
            Some(r#"{"genre":"Action"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_register_non_positive_duration_is_bad_request() {
        let mut movies = MockMovieRepository::new();
        movies.expect_insert().never();

        let response = send(
            movie_app(movies),
            Method::POST,
            "/movie/register",
            Some(r#"{"name":"Thor","durationMinutes":-5}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_returns_camel_case_records() {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_name()
            .withf(|name| name == "Thor")
            .times(1)
            .returning(|name| Ok(vec![stored(1, name)]));

        let response = send(movie_app(movies), Method::GET, "/movie/search?name=Thor", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["name"], "Thor");
        assert_eq!(json[0]["releaseYear"], 2011);
        assert_eq!(json[0]["durationMinutes"], 115);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_not_found() {
        let mut movies = MockMovieRepository::new();
        movies.expect_find_by_name().returning(|_| Ok(Vec::new()));

        let response = send(movie_app(movies), Method::GET, "/movie/search?name=Loki", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "No se encontró la película con nombre 'Loki'"
        );
    }

    #[tokio::test]
    async fn test_update_returns_confirmation() {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(stored(id, "Thor"))));
        movies
            .expect_update()
            .withf(|m: &Movie| m.genre.as_deref() == Some("Fantasy") && m.name == "Thor")
            .times(1)
            .returning(|m| Ok(m.clone()));

        let response = send(
            movie_app(movies),
            Method::PUT,
            "/movie/update/1",
            Some(r#"{"genre":"Fantasy"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Película actualizada correctamente");
    }

    #[tokio::test]
    async fn test_update_missing_movie_is_not_found() {
        let mut movies = MockMovieRepository::new();
        movies.expect_find_by_id().with(eq(5)).returning(|_| Ok(None));
        movies.expect_update().never();

        let response = send(
            movie_app(movies),
            Method::PUT,
            "/movie/update/5",
            Some(r#"{"genre":"Fantasy"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "No se encontró la película con id 5"
        );
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation() {
        let mut movies = MockMovieRepository::new();
        movies.expect_exists_by_id().with(eq(1)).returning(|_| Ok(true));
        movies
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let response = send(movie_app(movies), Method::DELETE, "/movie/delete/1", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Película eliminada correctamente");
    }

    #[tokio::test]
    async fn test_delete_missing_movie_is_not_found() {
        let mut movies = MockMovieRepository::new();
        movies.expect_exists_by_id().with(eq(6)).returning(|_| Ok(false));
        movies.expect_delete_by_id().never();

        let response = send(movie_app(movies), Method::DELETE, "/movie/delete/6", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
