//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_db::models::planet::{CreatePlanet, Planet, UpdatePlanet};

use crate::error::AppResult;
use crate::extract::{Page, PathId, ValidatedJson};
use crate::state::AppState;

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlanet>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let planet = state.planets.create(&input).await?;
    Ok((StatusCode::CREATED, Json(planet)))
}

/// GET /planets?skip=&take=
pub async fn list(
    State(state): State<AppState>,
    Page(page): Page,
) -> AppResult<Json<Vec<Planet>>> {
    Ok(Json(state.planets.list(page).await?))
}

/// GET /planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Planet>> {
    Ok(Json(state.planets.get(id).await?))
}

/// PUT /planets/{id}
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdatePlanet>,
) -> AppResult<Json<Planet>> {
    Ok(Json(state.planets.update(id, &input).await?))
}

/// DELETE /planets/{id}
///
/// Responds with the deleted planet.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Planet>> {
    Ok(Json(state.planets.delete(id).await?))
}
