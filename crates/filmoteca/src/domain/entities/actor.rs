//! Actor - A performer credited in films

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ensure_name, trim_name};
use crate::domain::errors::DomainError;

/// Actor as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Actor that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// Field overrides for an Actor update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorChanges {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Actor {
    /// How error messages refer to a Actor
    pub const LABEL: &'static str = "el actor";

    pub fn apply(self, changes: ActorChanges) -> Self {
        Self {
            id: self.id,
            name: changes.name.unwrap_or(self.name),
            nationality: changes.nationality.unwrap_or(self.nationality),
            date_of_birth: changes.date_of_birth.or(self.date_of_birth),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

impl NewActor {
    /// Trim the name before it is validated or looked up
    pub fn normalized(mut self) -> Self {
        self.name = trim_name(self.name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_name(&self.name)
    }
}

impl ActorChanges {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(trim_name);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.name {
            Some(name) => ensure_name(name),
            None => Ok(()),
        }
    }
}
