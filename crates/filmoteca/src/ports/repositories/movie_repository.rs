//! Movie Repository Port
//!
//! Abstract interface for Movie persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Movie, NewMovie};

/// Repository interface for Movie entities
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find a Movie by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, DomainError>;

    /// Find all Movies whose name matches exactly, ordered by ID
    async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, DomainError>;

    /// Check if a Movie exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Check if any Movie carries this name
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new Movie; the store assigns the ID
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, DomainError>;

    /// Persist the fields of an existing Movie
    async fn update(&self, movie: &Movie) -> Result<Movie, DomainError>;

    /// Delete a Movie by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
