//! Holocron API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! services) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
