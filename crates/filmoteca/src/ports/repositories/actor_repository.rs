//! Actor Repository Port
//!
//! Abstract interface for Actor persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Actor, NewActor};

/// Repository interface for Actor entities
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Find an Actor by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Actor>, DomainError>;

    /// Find all Actors whose name matches exactly, ordered by ID
    async fn find_by_name(&self, name: &str) -> Result<Vec<Actor>, DomainError>;

    /// Check if an Actor exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Check if any Actor carries this name
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new Actor; the store assigns the ID
    async fn insert(&self, actor: &NewActor) -> Result<Actor, DomainError>;

    /// Persist the fields of an existing Actor
    async fn update(&self, actor: &Actor) -> Result<Actor, DomainError>;

    /// Delete an Actor by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
