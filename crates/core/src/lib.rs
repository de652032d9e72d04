//! Domain primitives shared by the persistence and HTTP layers.
//!
//! This crate performs no IO: it holds id/timestamp aliases, the domain
//! error type, request validation rules and pagination parsing.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
