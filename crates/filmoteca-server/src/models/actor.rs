//! Actor DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use filmoteca::{Actor, ActorChanges, NewActor};

/// Register Actor request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterActorRequest {
    #[schema(example = "Chris Hemsworth")]
    pub name: String,
    #[schema(example = "Australian")]
    pub nationality: String,
    #[schema(example = "1983-08-11")]
    pub date_of_birth: Option<NaiveDate>,
}

impl From<RegisterActorRequest> for NewActor {
    fn from(req: RegisterActorRequest) -> Self {
        Self {
            name: req.name,
            nationality: req.nationality,
            date_of_birth: req.date_of_birth,
        }
    }
}

/// Update Actor request; omitted fields keep their stored values
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActorRequest {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UpdateActorRequest> for ActorChanges {
    fn from(req: UpdateActorRequest) -> Self {
        Self {
            name: req.name,
            nationality: req.nationality,
            date_of_birth: req.date_of_birth,
        }
    }
}

/// Actor response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActorResponse {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Actor> for ActorResponse {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            name: actor.name,
            nationality: actor.nationality,
            date_of_birth: actor.date_of_birth,
            created_at: actor.created_at,
            updated_at: actor.updated_at,
        }
    }
}
