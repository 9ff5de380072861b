//! NamePolicy - Per-entity rule for name uniqueness

use serde::{Deserialize, Serialize};

/// Whether a catalog entity's name must be unique across its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    Unique,
    #[default]
    AllowDuplicates,
}

impl NamePolicy {
    pub fn from_unique_flag(unique: bool) -> Self {
        if unique {
            NamePolicy::Unique
        } else {
            NamePolicy::AllowDuplicates
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, NamePolicy::Unique)
    }
}

impl std::fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamePolicy::Unique => write!(f, "unique"),
            NamePolicy::AllowDuplicates => write!(f, "allow_duplicates"),
        }
    }
}

impl std::str::FromStr for NamePolicy {
    type Err = String;

    /// Accepts the policy names as well as boolean spellings ("true" = unique)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unique" | "true" | "1" | "yes" => Ok(NamePolicy::Unique),
            "allow_duplicates" | "false" | "0" | "no" => Ok(NamePolicy::AllowDuplicates),
            _ => Err(format!("Unknown name policy: {}", s)),
        }
    }
}
