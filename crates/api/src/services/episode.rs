use holocron_core::error::CoreError;
use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use holocron_db::models::episode::{CreateEpisode, Episode, UpdateEpisode};
use holocron_db::repositories::EpisodeRepo;
use holocron_db::DbPool;

use crate::error::{AppError, AppResult};

/// Business rules for episodes.
#[derive(Clone)]
pub struct EpisodeService {
    pool: DbPool,
}

impl EpisodeService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: Pagination) -> AppResult<Vec<Episode>> {
        Ok(EpisodeRepo::list(&self.pool, page).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Episode> {
        EpisodeRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: &CreateEpisode) -> AppResult<Episode> {
        let episode = EpisodeRepo::create(&self.pool, input).await?;
        tracing::info!(episode_id = episode.id, title = %episode.title, "Episode created");
        Ok(episode)
    }

    pub async fn update(&self, id: DbId, input: &UpdateEpisode) -> AppResult<Episode> {
        EpisodeRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: DbId) -> AppResult<Episode> {
        let episode = EpisodeRepo::delete(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(episode_id = id, "Episode deleted");
        Ok(episode)
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Episode",
        id,
    })
}
