//! Episode entity model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use holocron_core::validation::{Validate, Violations};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An episode row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    #[serde(default)]
    pub title: String,
}

/// DTO for updating an existing episode. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEpisode {
    pub title: Option<String>,
}

impl Validate for CreateEpisode {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.name_length("title", &self.title);
        v.into_vec()
    }
}

impl Validate for UpdateEpisode {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        if let Some(title) = &self.title {
            v.name_length("title", title);
        }
        v.into_vec()
    }
}
