use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use holocron_db::repositories::{CharacterRepo, EpisodeRepo, PlanetRepo};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// `"ok"` or `"unavailable"`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
    /// Row counts per resource; absent when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<RecordCounts>,
}

#[derive(Debug, Serialize)]
pub struct RecordCounts {
    pub planets: i64,
    pub episodes: i64,
    pub characters: i64,
}

async fn record_counts(pool: &holocron_db::DbPool) -> Result<RecordCounts, sqlx::Error> {
    Ok(RecordCounts {
        planets: PlanetRepo::count(pool).await?,
        episodes: EpisodeRepo::count(pool).await?,
        characters: CharacterRepo::count(pool).await?,
    })
}

/// GET /health
///
/// 200 with record counts while the database answers, 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let records = match record_counts(&state.pool).await {
        Ok(counts) => Some(counts),
        Err(e) => {
            tracing::warn!(error = %e, "Health probe could not reach the database");
            None
        }
    };

    let (code, status) = match records {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };

    (
        code,
        Json(HealthStatus {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: records.is_some(),
            records,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
