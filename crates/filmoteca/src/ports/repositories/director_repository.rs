//! Director Repository Port
//!
//! Abstract interface for Director persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Director, NewDirector};

/// Repository interface for Director entities
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    /// Find a Director by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Director>, DomainError>;

    /// Find all Directors whose name matches exactly, ordered by ID
    async fn find_by_name(&self, name: &str) -> Result<Vec<Director>, DomainError>;

    /// Check if a Director exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Check if any Director carries this name
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new Director; the store assigns the ID
    async fn insert(&self, director: &NewDirector) -> Result<Director, DomainError>;

    /// Persist the fields of an existing Director
    async fn update(&self, director: &Director) -> Result<Director, DomainError>;

    /// Delete a Director by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
