use axum::routing::get;
use axum::Router;

use crate::handlers::{character, episode};
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/characters     -> character::list_by_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route("/{id}/characters", get(character::list_by_episode))
}
