//! Filmoteca API Routes
//!
//! - /movie - Movie catalog (search, register, update, delete)
//! - /actor - Actor catalog
//! - /director - Director catalog
//! - /health - Liveness
//! - /swagger-ui - OpenAPI documentation

pub mod actor;
pub mod director;
pub mod movie;
pub mod swagger;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use filmoteca::DomainError;

use crate::AppState;

/// Handler error: status plus a plain-text message
pub type ApiError = (StatusCode, String);

/// Map a domain error onto an HTTP status
pub(crate) fn error_response(e: DomainError) -> ApiError {
    match &e {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        DomainError::Repository(msg) => {
            tracing::error!("Repository error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor".to_string(),
            )
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Filmoteca API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(movie::router())
        .merge(actor::router())
        .merge(director::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, body_json, send};
    use super::*;
    use axum::http::Method;
    use filmoteca::{MockActorRepository, MockDirectorRepository, MockMovieRepository};

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            error_response(DomainError::not_found("Movie", 1)).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(DomainError::Validation("taken".to_string())),
            (StatusCode::BAD_REQUEST, "taken".to_string())
        );

        let (status, body) = error_response(DomainError::Repository("pool timed out".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("pool"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app(
            MockMovieRepository::new(),
            MockActorRepository::new(),
            MockDirectorRepository::new(),
        );
        let response = send(app, Method::GET, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_document_lists_catalog_paths() {
        let app = app(
            MockMovieRepository::new(),
            MockActorRepository::new(),
            MockDirectorRepository::new(),
        );
        let response = send(app, Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/actor/register"].is_object());
        assert!(json["paths"]["/director/update/{id}"].is_object());
        assert!(json["paths"]["/movie/search"].is_object());
    }
}
