pub mod character;
pub mod episode;
pub mod planet;
