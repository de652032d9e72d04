pub mod character;
pub mod episode;
pub mod health;
pub mod planet;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /planets                      list, create
/// /planets/{id}                 get, update, delete
/// /planets/{id}/characters      characters living on the planet
///
/// /episodes                     list, create
/// /episodes/{id}                get, update, delete
/// /episodes/{id}/characters     characters appearing in the episode
///
/// /characters                   list, create
/// /characters/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/planets", planet::router())
        .nest("/episodes", episode::router())
        .nest("/characters", character::router())
}
