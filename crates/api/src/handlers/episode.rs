//! Handlers for the `/episodes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_db::models::episode::{CreateEpisode, Episode, UpdateEpisode};

use crate::error::AppResult;
use crate::extract::{Page, PathId, ValidatedJson};
use crate::state::AppState;

/// POST /episodes
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    let episode = state.episodes.create(&input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /episodes?skip=&take=
pub async fn list(
    State(state): State<AppState>,
    Page(page): Page,
) -> AppResult<Json<Vec<Episode>>> {
    Ok(Json(state.episodes.list(page).await?))
}

/// GET /episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Episode>> {
    Ok(Json(state.episodes.get(id).await?))
}

/// PUT /episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    Ok(Json(state.episodes.update(id, &input).await?))
}

/// DELETE /episodes/{id}
///
/// Responds with the deleted episode. Its character links go with it.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Episode>> {
    Ok(Json(state.episodes.delete(id).await?))
}
