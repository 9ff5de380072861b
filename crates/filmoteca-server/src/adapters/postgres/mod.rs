//! PostgreSQL Repository Implementations

mod actor_repository;
mod director_repository;
mod movie_repository;

pub use actor_repository::PgActorRepository;
pub use director_repository::PgDirectorRepository;
pub use movie_repository::PgMovieRepository;

use filmoteca::DomainError;

fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}
