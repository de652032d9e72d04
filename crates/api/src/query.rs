//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Raw pagination parameters (`?skip=&take=`).
///
/// Kept as strings so malformed values surface as validation messages
/// instead of a framework rejection. Parsed by
/// [`holocron_core::pagination::Pagination::parse`] in the
/// [`Page`](crate::extract::Page) extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<String>,
    pub take: Option<String>,
}
