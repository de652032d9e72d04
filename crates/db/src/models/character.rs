//! Character entity model and DTOs.
//!
//! Characters reference a planet by id and link to episodes through the
//! `character_episodes` join table. API reads always return the expanded
//! [`CharacterDetail`] shape.

use holocron_core::types::{DbId, Timestamp};
use holocron_core::validation::{Validate, Violations, DESCRIPTION_MAX_LENGTH};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::episode::Episode;
use crate::models::nullable;
use crate::models::planet::Planet;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub planet_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A character with its planet and episodes embedded.
///
/// Serializes flat: the character's own fields plus `planet` (object or
/// `null`) and `episodes` (array, ordered by episode id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    pub planet: Option<Planet>,
    pub episodes: Vec<Episode>,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub planet_id: Option<DbId>,
    /// Existing episode ids to link. Duplicates link once.
    pub episode_ids: Option<Vec<DbId>>,
}

/// DTO for updating an existing character. All fields are optional.
///
/// `description` and `planetId` accept an explicit `null` to clear the
/// value. A supplied `episodeIds` replaces the whole set of linked episodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub planet_id: Option<Option<DbId>>,
    pub episode_ids: Option<Vec<DbId>>,
}

impl Validate for CreateCharacter {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        v.not_empty("name", &self.name).name_length("name", &self.name);
        if let Some(description) = &self.description {
            v.max_length("description", description, DESCRIPTION_MAX_LENGTH);
        }
        if let Some(planet_id) = self.planet_id {
            v.positive("planetId", planet_id);
        }
        if let Some(episode_ids) = &self.episode_ids {
            v.each_positive("episodeIds", episode_ids);
        }
        v.into_vec()
    }
}

impl Validate for UpdateCharacter {
    fn violations(&self) -> Vec<String> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.name_length("name", name);
        }
        if let Some(Some(description)) = &self.description {
            v.max_length("description", description, DESCRIPTION_MAX_LENGTH);
        }
        if let Some(Some(planet_id)) = self.planet_id {
            v.positive("planetId", planet_id);
        }
        if let Some(episode_ids) = &self.episode_ids {
            v.each_positive("episodeIds", episode_ids);
        }
        v.into_vec()
    }
}
