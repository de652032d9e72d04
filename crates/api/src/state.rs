use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{CharacterService, EpisodeService, PlanetService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holocron_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub planets: PlanetService,
    pub episodes: EpisodeService,
    pub characters: CharacterService,
}

impl AppState {
    /// Wire every service to the same pool.
    pub fn new(pool: holocron_db::DbPool, config: ServerConfig) -> Self {
        Self {
            planets: PlanetService::new(pool.clone()),
            episodes: EpisodeService::new(pool.clone()),
            characters: CharacterService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
