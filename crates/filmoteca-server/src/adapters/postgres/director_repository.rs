//! PostgreSQL implementation of DirectorRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use filmoteca::{Director, DirectorRepository, DomainError, NewDirector};

use super::repository_error;

/// PostgreSQL implementation of DirectorRepository
pub struct PgDirectorRepository {
    pool: PgPool,
}

impl PgDirectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DirectorRow {
    id: i64,
    name: String,
    nationality: String,
    date_of_birth: Option<NaiveDate>,
    wikipedia_link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            nationality: row.nationality,
            date_of_birth: row.date_of_birth,
            wikipedia_link: row.wikipedia_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl DirectorRepository for PgDirectorRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Director>, DomainError> {
        let row = sqlx::query_as::<_, DirectorRow>("SELECT * FROM directors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Director>, DomainError> {
        let rows = sqlx::query_as::<_, DirectorRow>(
            "SELECT * FROM directors WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM directors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM directors WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn insert(&self, director: &NewDirector) -> Result<Director, DomainError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            r#"
            INSERT INTO directors (name, nationality, date_of_birth, wikipedia_link)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&director.name)
        .bind(&director.nationality)
        .bind(director.date_of_birth)
        .bind(&director.wikipedia_link)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn update(&self, director: &Director) -> Result<Director, DomainError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            r#"
            UPDATE directors
            SET name = $2, nationality = $3, date_of_birth = $4, wikipedia_link = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(director.id)
        .bind(&director.name)
        .bind(&director.nationality)
        .bind(director.date_of_birth)
        .bind(&director.wikipedia_link)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found(Director::LABEL, director.id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
