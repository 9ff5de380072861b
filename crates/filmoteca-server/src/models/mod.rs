//! Filmoteca Data Models
//!
//! Request/response DTOs for the HTTP API. Field names are camelCase on
//! the wire (`dateOfBirth`, `wikipediaLink`, `releaseYear`).

mod actor;
mod director;
mod movie;

pub use actor::*;
pub use director::*;
pub use movie::*;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string for `/{entity}/search`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact name to look up
    pub name: String,
}
