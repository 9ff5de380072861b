//! Catalog Configuration
//!
//! Business-rule settings read from Shuttle secrets at startup.
//!
//! - `MOVIE_UNIQUE_NAMES`
//! - `ACTOR_UNIQUE_NAMES`
//! - `DIRECTOR_UNIQUE_NAMES`
//!
//! Each accepts `true`/`false` (or `unique`/`allow_duplicates`).

use filmoteca::NamePolicy;

const MOVIE_UNIQUE_NAMES: &str = "MOVIE_UNIQUE_NAMES";
const ACTOR_UNIQUE_NAMES: &str = "ACTOR_UNIQUE_NAMES";
const DIRECTOR_UNIQUE_NAMES: &str = "DIRECTOR_UNIQUE_NAMES";

/// Name policies for each catalog slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub movie_names: NamePolicy,
    pub actor_names: NamePolicy,
    pub director_names: NamePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            movie_names: NamePolicy::AllowDuplicates,
            actor_names: NamePolicy::AllowDuplicates,
            director_names: NamePolicy::Unique,
        }
    }
}

impl CatalogConfig {
    /// Build from Shuttle secrets
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup, keeping defaults for missing or invalid values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            movie_names: read_policy(&lookup, MOVIE_UNIQUE_NAMES, defaults.movie_names),
            actor_names: read_policy(&lookup, ACTOR_UNIQUE_NAMES, defaults.actor_names),
            director_names: read_policy(&lookup, DIRECTOR_UNIQUE_NAMES, defaults.director_names),
        }
    }
}

fn read_policy<F>(lookup: &F, key: &str, default: NamePolicy) -> NamePolicy
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("⚠️  Ignoring {}: {} (using {})", key, e, default);
            default
        }),
        None => default,
    }
}
