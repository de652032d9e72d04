//! Service layer: one service per entity slice.
//!
//! Services are constructed explicitly from a [`DbPool`](holocron_db::DbPool)
//! and hold no other state. They translate repository `Option`s into
//! [`CoreError::NotFound`](holocron_core::error::CoreError::NotFound) and
//! leave store errors for [`AppError`](crate::error::AppError) to classify.

pub mod character;
pub mod episode;
pub mod planet;

pub use character::CharacterService;
pub use episode::EpisodeService;
pub use planet::PlanetService;
