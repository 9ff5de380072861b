//! Director Application Service (Use Case)
//!
//! Enforces catalog rules before delegating to the DirectorRepository.

use std::sync::Arc;

use filmoteca::{
    Director, DirectorChanges, DirectorRepository, DomainError, NamePolicy, NewDirector,
};

/// Application service for Director operations
pub struct DirectorService<R: DirectorRepository + ?Sized> {
    repo: Arc<R>,
    names: NamePolicy,
}

impl<R: DirectorRepository + ?Sized> DirectorService<R> {
    pub fn new(repo: Arc<R>, names: NamePolicy) -> Self {
        Self { repo, names }
    }

    /// Find Directors by exact name; an empty result is NotFound
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Director>, DomainError> {
        let directors = self.repo.find_by_name(name).await?;
        if directors.is_empty() {
            return Err(DomainError::not_found_by_name(Director::LABEL, name));
        }
        Ok(directors)
    }

    /// Register a new Director
    pub async fn register(&self, director: NewDirector) -> Result<Director, DomainError> {
        let director = director.normalized();
        director.validate()?;

        if self.names.is_unique() && self.repo.exists_by_name(&director.name).await? {
            return Err(DomainError::Validation(
                "El nombre del director ya está registrado".to_string(),
            ));
        }

        let saved = self.repo.insert(&director).await?;
        tracing::info!("Registered Director: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Overwrite the provided fields of a stored Director
    pub async fn update(&self, id: i64, changes: DirectorChanges) -> Result<Director, DomainError> {
        let changes = changes.normalized();
        changes.validate()?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Director::LABEL, id))?;

        if let Some(name) = changes.name.as_deref() {
            if self.names.is_unique()
                && name != current.name
                && self.repo.exists_by_name(name).await?
            {
                return Err(DomainError::Validation(
                    "El nombre del director ya está registrado".to_string(),
                ));
            }
        }

        let saved = self.repo.update(&current.apply(changes)).await?;
        tracing::info!("Updated Director: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete a Director
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(Director::LABEL, id));
        }

        // Removed concurrently between the check and the delete
        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::not_found(Director::LABEL, id));
        }

        tracing::info!("Deleted Director: {}", id);
        Ok(())
    }
}
