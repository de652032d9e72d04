use holocron_core::error::CoreError;
use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use holocron_db::models::character::{CharacterDetail, CreateCharacter, UpdateCharacter};
use holocron_db::repositories::{CharacterRepo, EpisodeRepo, PlanetRepo};
use holocron_db::DbPool;

use crate::error::{AppError, AppResult};

/// Business rules for characters.
///
/// Every character returned from here carries its planet and episodes.
/// Links to planets and episodes are validated by foreign keys, not by
/// lookups here.
#[derive(Clone)]
pub struct CharacterService {
    pool: DbPool,
}

impl CharacterService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: Pagination) -> AppResult<Vec<CharacterDetail>> {
        Ok(CharacterRepo::list(&self.pool, page).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<CharacterDetail> {
        CharacterRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found("Character", id))
    }

    pub async fn create(&self, input: &CreateCharacter) -> AppResult<CharacterDetail> {
        let character = CharacterRepo::create(&self.pool, input).await?;
        tracing::info!(
            character_id = character.character.id,
            name = %character.character.name,
            episodes = character.episodes.len(),
            "Character created"
        );
        Ok(character)
    }

    pub async fn update(&self, id: DbId, input: &UpdateCharacter) -> AppResult<CharacterDetail> {
        CharacterRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| not_found("Character", id))
    }

    /// Returns the character as it was before deletion.
    pub async fn delete(&self, id: DbId) -> AppResult<CharacterDetail> {
        let character = CharacterRepo::delete(&self.pool, id)
            .await?
            .ok_or_else(|| not_found("Character", id))?;
        tracing::info!(character_id = id, "Character deleted");
        Ok(character)
    }

    /// Characters whose home planet is `planet_id`.
    pub async fn list_by_planet(
        &self,
        planet_id: DbId,
        page: Pagination,
    ) -> AppResult<Vec<CharacterDetail>> {
        if !PlanetRepo::exists(&self.pool, planet_id).await? {
            return Err(not_found("Planet", planet_id));
        }
        Ok(CharacterRepo::list_by_planet(&self.pool, planet_id, page).await?)
    }

    /// Characters appearing in `episode_id`.
    pub async fn list_by_episode(
        &self,
        episode_id: DbId,
        page: Pagination,
    ) -> AppResult<Vec<CharacterDetail>> {
        if !EpisodeRepo::exists(&self.pool, episode_id).await? {
            return Err(not_found("Episode", episode_id));
        }
        Ok(CharacterRepo::list_by_episode(&self.pool, episode_id, page).await?)
    }
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}
