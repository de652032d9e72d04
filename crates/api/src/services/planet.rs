use holocron_core::error::CoreError;
use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use holocron_db::models::planet::{CreatePlanet, Planet, UpdatePlanet};
use holocron_db::repositories::PlanetRepo;
use holocron_db::DbPool;

use crate::error::{AppError, AppResult};

/// Business rules for planets.
#[derive(Clone)]
pub struct PlanetService {
    pool: DbPool,
}

impl PlanetService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, page: Pagination) -> AppResult<Vec<Planet>> {
        Ok(PlanetRepo::list(&self.pool, page).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Planet> {
        PlanetRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: &CreatePlanet) -> AppResult<Planet> {
        let planet = PlanetRepo::create(&self.pool, input).await?;
        tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");
        Ok(planet)
    }

    pub async fn update(&self, id: DbId, input: &UpdatePlanet) -> AppResult<Planet> {
        PlanetRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Characters living on the planet keep existing without a planet.
    pub async fn delete(&self, id: DbId) -> AppResult<Planet> {
        let planet = PlanetRepo::delete(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(planet_id = id, "Planet deleted");
        Ok(planet)
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Planet",
        id,
    })
}
