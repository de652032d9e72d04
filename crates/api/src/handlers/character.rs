//! Handlers for the `/characters` resource.
//!
//! Every response embeds the character's `planet` and `episodes`.
//! Also serves the nested listings `/planets/{id}/characters` and
//! `/episodes/{id}/characters`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_db::models::character::{CharacterDetail, CreateCharacter, UpdateCharacter};

use crate::error::AppResult;
use crate::extract::{Page, PathId, ValidatedJson};
use crate::state::AppState;

/// POST /characters
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<CharacterDetail>)> {
    let character = state.characters.create(&input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /characters?skip=&take=
pub async fn list(
    State(state): State<AppState>,
    Page(page): Page,
) -> AppResult<Json<Vec<CharacterDetail>>> {
    Ok(Json(state.characters.list(page).await?))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<CharacterDetail>> {
    Ok(Json(state.characters.get(id).await?))
}

/// PUT /characters/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdateCharacter>,
) -> AppResult<Json<CharacterDetail>> {
    Ok(Json(state.characters.update(id, &input).await?))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<CharacterDetail>> {
    Ok(Json(state.characters.delete(id).await?))
}

/// GET /planets/{id}/characters
pub async fn list_by_planet(
    State(state): State<AppState>,
    PathId(planet_id): PathId,
    Page(page): Page,
) -> AppResult<Json<Vec<CharacterDetail>>> {
    Ok(Json(state.characters.list_by_planet(planet_id, page).await?))
}

/// GET /episodes/{id}/characters
pub async fn list_by_episode(
    State(state): State<AppState>,
    PathId(episode_id): PathId,
    Page(page): Page,
) -> AppResult<Json<Vec<CharacterDetail>>> {
    Ok(Json(state.characters.list_by_episode(episode_id, page).await?))
}
