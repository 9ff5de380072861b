//! PostgreSQL implementation of MovieRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use filmoteca::{DomainError, Movie, MovieRepository, NewMovie};

use super::repository_error;

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    name: String,
    release_year: Option<i32>,
    genre: Option<String>,
    duration_minutes: Option<i32>,
    synopsis: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            release_year: row.release_year,
            genre: row.genre,
            duration_minutes: row.duration_minutes,
            synopsis: row.synopsis,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, DomainError> {
        let row = sqlx::query_as::<_, MovieRow>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Movie>, DomainError> {
        let rows =
            sqlx::query_as::<_, MovieRow>("SELECT * FROM movies WHERE name = $1 ORDER BY id")
                .bind(name)
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn insert(&self, movie: &NewMovie) -> Result<Movie, DomainError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            INSERT INTO movies (name, release_year, genre, duration_minutes, synopsis)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&movie.name)
        .bind(movie.release_year)
        .bind(&movie.genre)
        .bind(movie.duration_minutes)
        .bind(&movie.synopsis)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, DomainError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            UPDATE movies
            SET name = $2, release_year = $3, genre = $4, duration_minutes = $5,
                synopsis = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(movie.id)
        .bind(&movie.name)
        .bind(movie.release_year)
        .bind(&movie.genre)
        .bind(movie.duration_minutes)
        .bind(&movie.synopsis)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found(Movie::LABEL, movie.id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
