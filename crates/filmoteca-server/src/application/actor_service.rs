//! Actor Application Service (Use Case)
//!
//! Enforces catalog rules before delegating to the ActorRepository.

use std::sync::Arc;

use filmoteca::{Actor, ActorChanges, ActorRepository, DomainError, NamePolicy, NewActor};

/// Application service for Actor operations
pub struct ActorService<R: ActorRepository + ?Sized> {
    repo: Arc<R>,
    names: NamePolicy,
}

impl<R: ActorRepository + ?Sized> ActorService<R> {
    pub fn new(repo: Arc<R>, names: NamePolicy) -> Self {
        Self { repo, names }
    }

    /// Find Actors by exact name; an empty result is NotFound
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Actor>, DomainError> {
        let actors = self.repo.find_by_name(name).await?;
        if actors.is_empty() {
            return Err(DomainError::not_found_by_name(Actor::LABEL, name));
        }
        Ok(actors)
    }

    /// Register a new Actor
    pub async fn register(&self, actor: NewActor) -> Result<Actor, DomainError> {
        let actor = actor.normalized();
        actor.validate()?;

        if self.names.is_unique() && self.repo.exists_by_name(&actor.name).await? {
            return Err(DomainError::Validation(
                "El nombre del actor ya está registrado".to_string(),
            ));
        }

        let saved = self.repo.insert(&actor).await?;
        tracing::info!("Registered Actor: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Overwrite the provided fields of a stored Actor
    pub async fn update(&self, id: i64, changes: ActorChanges) -> Result<Actor, DomainError> {
        let changes = changes.normalized();
        changes.validate()?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Actor::LABEL, id))?;

        if let Some(name) = changes.name.as_deref() {
            if self.names.is_unique()
                && name != current.name
                && self.repo.exists_by_name(name).await?
            {
                return Err(DomainError::Validation(
                    "El nombre del actor ya está registrado".to_string(),
                ));
            }
        }

        let saved = self.repo.update(&current.apply(changes)).await?;
        tracing::info!("Updated Actor: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete an Actor
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(Actor::LABEL, id));
        }

        // Removed concurrently between the check and the delete
        if !self.repo.delete_by_id(id).await? {
            return Err(DomainError::not_found(Actor::LABEL, id));
        }

        tracing::info!("Deleted Actor: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use filmoteca::MockActorRepository;
    use mockall::predicate::eq;

    fn hemsworth(id: i64) -> Actor {
        Actor {
            id,
            name: "Chris Hemsworth".to_string(),
            nationality: "Australian".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1983, 8, 11),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockActorRepository) -> ActorService<MockActorRepository> {
        ActorService::new(Arc::new(repo), NamePolicy::AllowDuplicates)
    }

    #[tokio::test]
    async fn test_register_does_not_check_names() {
        let mut repo = MockActorRepository::new();
        repo.expect_exists_by_name().never();
        repo.expect_insert()
            .withf(|a: &NewActor| a.name == "Chris Hemsworth" && a.nationality == "Australian")
            .times(1)
            .returning(|_| Ok(hemsworth(1)));

        let actor = NewActor {
            name: "Chris Hemsworth".to_string(),
            nationality: "Australian".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1983, 8, 11),
        };
        assert_eq!(service(repo).register(actor).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_update_renames_actor() {
        let mut repo = MockActorRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(hemsworth(1))));
        repo.expect_update()
            .withf(|a: &Actor| a.name == "Chris Evans" && a.nationality == "Australian")
            .times(1)
            .returning(|a| Ok(a.clone()));

        let changes = ActorChanges {
            name: Some("Chris Evans".to_string()),
            ..Default::default()
        };
        let updated = service(repo).update(1, changes).await.unwrap();
        assert_eq!(updated.date_of_birth, NaiveDate::from_ymd_opt(1983, 8, 11));
    }

    #[tokio::test]
    async fn test_delete_reports_row_removed_concurrently() {
        let mut repo = MockActorRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(false));

        assert!(service(repo).delete_by_id(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_search_propagates_repository_errors() {
        let mut repo = MockActorRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Err(DomainError::Repository("connection reset".to_string())));

        let err = service(repo).search_by_name("Chris Hemsworth").await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[tokio::test]
    async fn test_search_without_matches_is_not_found() {
        let mut repo = MockActorRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Chris Pratt")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let err = service(repo).search_by_name("Chris Pratt").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
