//! PostgreSQL implementation of ActorRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use filmoteca::{Actor, ActorRepository, DomainError, NewActor};

use super::repository_error;

/// PostgreSQL implementation of ActorRepository
pub struct PgActorRepository {
    pool: PgPool,
}

impl PgActorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ActorRow {
    id: i64,
    name: String,
    nationality: String,
    date_of_birth: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            nationality: row.nationality,
            date_of_birth: row.date_of_birth,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ActorRepository for PgActorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Actor>, DomainError> {
        let row = sqlx::query_as::<_, ActorRow>("SELECT * FROM actors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Actor>, DomainError> {
        let rows =
            sqlx::query_as::<_, ActorRow>("SELECT * FROM actors WHERE name = $1 ORDER BY id")
                .bind(name)
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM actors WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn insert(&self, actor: &NewActor) -> Result<Actor, DomainError> {
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            INSERT INTO actors (name, nationality, date_of_birth)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&actor.name)
        .bind(&actor.nationality)
        .bind(actor.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn update(&self, actor: &Actor) -> Result<Actor, DomainError> {
        let row = sqlx::query_as::<_, ActorRow>(
            r#"
            UPDATE actors
            SET name = $2, nationality = $3, date_of_birth = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(actor.id)
        .bind(&actor.name)
        .bind(&actor.nationality)
        .bind(actor.date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found(Actor::LABEL, actor.id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
