//! Movie DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use filmoteca::{Movie, MovieChanges, NewMovie};

/// Register Movie request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMovieRequest {
    #[schema(example = "Thor")]
    pub name: String,
    #[schema(example = 2011)]
    pub release_year: Option<i32>,
    #[schema(example = "Action")]
    pub genre: Option<String>,
    #[schema(example = 115)]
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
}

impl From<RegisterMovieRequest> for NewMovie {
    fn from(req: RegisterMovieRequest) -> Self {
        Self {
            name: req.name,
            release_year: req.release_year,
            genre: req.genre,
            duration_minutes: req.duration_minutes,
            synopsis: req.synopsis,
        }
    }
}

/// Update Movie request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    pub name: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
}

impl From<UpdateMovieRequest> for MovieChanges {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            name: req.name,
            release_year: req.release_year,
            genre: req.genre,
            duration_minutes: req.duration_minutes,
            synopsis: req.synopsis,
        }
    }
}

/// Movie response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            release_year: movie.release_year,
            genre: movie.genre,
            duration_minutes: movie.duration_minutes,
            synopsis: movie.synopsis,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
