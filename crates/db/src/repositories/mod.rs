//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod episode_repo;
pub mod planet_repo;

pub use character_repo::CharacterRepo;
pub use episode_repo::EpisodeRepo;
pub use planet_repo::PlanetRepo;
