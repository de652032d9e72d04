//! Constraint names declared in `db/migrations`.
//!
//! Unique constraints are prefixed `uq_` and foreign keys `fk_`, so the
//! HTTP layer can classify a database error from the constraint name alone.

/// Prefix shared by every unique constraint.
pub const UNIQUE_PREFIX: &str = "uq_";

/// Prefix shared by every foreign-key constraint.
pub const FOREIGN_KEY_PREFIX: &str = "fk_";

/// The request field a constraint guards, spelled as it appears in JSON.
pub fn constraint_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "uq_planets_name" | "uq_characters_name" => Some("name"),
        "uq_episodes_title" => Some("title"),
        "fk_characters_planet_id" => Some("planetId"),
        "fk_character_episodes_episode_id" => Some("episodeIds"),
        "fk_character_episodes_character_id" => Some("characterId"),
        _ => None,
    }
}
