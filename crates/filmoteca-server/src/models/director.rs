//! Director DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use filmoteca::{Director, DirectorChanges, NewDirector};

/// Register Director request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDirectorRequest {
    #[schema(example = "Christopher Nolan")]
    pub name: String,
    #[schema(example = "British")]
    pub nationality: String,
    #[schema(example = "1970-07-30")]
    pub date_of_birth: Option<NaiveDate>,
    #[schema(example = "https://en.wikipedia.org/wiki/Christopher_Nolan")]
    pub wikipedia_link: Option<String>,
}

impl From<RegisterDirectorRequest> for NewDirector {
    fn from(req: RegisterDirectorRequest) -> Self {
        Self {
            name: req.name,
            nationality: req.nationality,
            date_of_birth: req.date_of_birth,
            wikipedia_link: req.wikipedia_link,
        }
    }
}

/// Update Director request; omitted fields keep their stored values
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDirectorRequest {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub wikipedia_link: Option<String>,
}

impl From<UpdateDirectorRequest> for DirectorChanges {
    fn from(req: UpdateDirectorRequest) -> Self {
        Self {
            name: req.name,
            nationality: req.nationality,
            date_of_birth: req.date_of_birth,
            wikipedia_link: req.wikipedia_link,
        }
    }
}

/// Director response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectorResponse {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub wikipedia_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Director> for DirectorResponse {
    fn from(director: Director) -> Self {
        Self {
            id: director.id,
            name: director.name,
            nationality: director.nationality,
            date_of_birth: director.date_of_birth,
            wikipedia_link: director.wikipedia_link,
            created_at: director.created_at,
            updated_at: director.updated_at,
        }
    }
}
