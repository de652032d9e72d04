//! Planet entity model and DTOs.

use holocron_core::types::{DbId, Timestamp};
use holocron_core::validation::{Validate, Violations};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new planet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanet {
    /// Missing in the payload deserializes as empty and fails validation.
    #[serde(default)]
    pub name: String,
}

/// DTO for updating an existing planet. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanet {
    pub name: Option<String>,
}

impl Validate for CreatePlanet {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.name_length("name", &self.name);
        v.into_vec()
    }
}

impl Validate for UpdatePlanet {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.name_length("name", name);
        }
        v.into_vec()
    }
}
