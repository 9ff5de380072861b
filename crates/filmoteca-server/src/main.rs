use sqlx::PgPool;
use std::sync::Arc;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{PgActorRepository, PgDirectorRepository, PgMovieRepository};
use application::{ActorService, DirectorService, MovieService};
use config::CatalogConfig;
use filmoteca::{ActorRepository, DirectorRepository, MovieRepository};

/// Application services over whichever repository implementation is injected
pub type AppMovieService = MovieService<dyn MovieRepository>;
pub type AppActorService = ActorService<dyn ActorRepository>;
pub type AppDirectorService = DirectorService<dyn DirectorRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<AppMovieService>,
    pub actor_service: Arc<AppActorService>,
    pub director_service: Arc<AppDirectorService>,
}

impl AppState {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        director_repo: Arc<dyn DirectorRepository>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            movie_service: Arc::new(MovieService::new(movie_repo, config.movie_names)),
            actor_service: Arc::new(ActorService::new(actor_repo, config.actor_names)),
            director_service: Arc::new(DirectorService::new(
                director_repo,
                config.director_names,
            )),
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎬 Filmoteca API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    let config = CatalogConfig::from_secrets(&secrets);
    tracing::info!(
        "📋 Name policies - movie: {}, actor: {}, director: {}",
        config.movie_names,
        config.actor_names,
        config.director_names
    );

    // Initialize repositories and application services
    let state = AppState::new(
        Arc::new(PgMovieRepository::new(pool.clone())),
        Arc::new(PgActorRepository::new(pool.clone())),
        Arc::new(PgDirectorRepository::new(pool)),
        config,
    );

    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Filmoteca API ready");

    Ok(router.into())
}
