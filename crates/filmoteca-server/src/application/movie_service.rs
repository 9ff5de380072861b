//! Movie Application Service (Use Case)
//!
//! Enforces catalog rules before delegating to the MovieRepository.

use std::sync::Arc;

use filmoteca::{DomainError, Movie, MovieChanges, MovieRepository, NamePolicy, NewMovie};

/// Application service for Movie operations
pub struct MovieService<R: MovieRepository + ?Sized> {
    repo: Arc<R>,
    names: NamePolicy,
}

impl<R: MovieRepository + ?Sized> MovieService<R> {
    pub fn new(repo: Arc<R>, names: NamePolicy) -> Self {
        Self { repo, names }
    }

    /// Find Movies by exact name; an empty result is NotFound
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Movie>, DomainError> {
        let movies = self.repo.find_by_name(name).await?;
        if movies.is_empty() {
            return Err(DomainError::not_found_by_name(Movie::LABEL, name));
        }
        Ok(movies)
    }

    /// Register a new Movie
    pub async fn register(&self, movie: NewMovie) -> Result<Movie, DomainError> {
        let movie = movie.normalized();
        movie.validate()?;

        if self.names.is_unique() && self.repo.exists_by_name(&movie.name).await? {
            return Err(DomainError::Validation(
                "El nombre de la película ya está registrado".to_string(),
            ));
        }

        let saved = self.repo.insert(&movie).await?;
        tracing::info!("Registered Movie: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update a Movie
    pub async fn update(&self, id: i64, changes: MovieChanges) -> Result<Movie, DomainError> {
        let changes = changes.normalized();
        changes.validate()?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Movie::LABEL, id))?;

        if let Some(name) = changes.name.as_deref() {
            if self.names.is_unique()
                && name != current.name
                && self.repo.exists_by_name(name).await?
            {
                return Err(DomainError::Validation(
                    "El nombre de la película ya está registrado".to_string(),
                ));
            }
        }

        let saved = self.repo.update(&current.apply(changes)).await?;
        tracing::info!("Updated Movie: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete a Movie
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(Movie::LABEL, id));
        }

        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::not_found(Movie::LABEL, id));
        }

        tracing::info!("Deleted Movie: {}", id);
        Ok(())
    }
}
