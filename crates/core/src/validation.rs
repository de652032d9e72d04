//! Request payload validation.
//!
//! DTOs implement [`Validate`] by running field rules through a
//! [`Violations`] collector. Messages are emitted in the order the rules
//! are checked, so a DTO lists its rules in field declaration order.

use validator::ValidateLength;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum length of a character name, planet name or episode title.
pub const NAME_MIN_LENGTH: u64 = 3;

/// Maximum length of a character name, planet name or episode title.
pub const NAME_MAX_LENGTH: u64 = 255;

/// Maximum length of a character description.
pub const DESCRIPTION_MAX_LENGTH: u64 = 255;

// ---------------------------------------------------------------------------
// Validate trait
// ---------------------------------------------------------------------------

/// Implemented by every create/update DTO accepted over HTTP.
pub trait Validate {
    /// Return every violated rule as a human-readable message.
    fn violations(&self) -> Vec<String>;

    /// `Ok(())` when no rule is violated, otherwise
    /// [`CoreError::Validation`] carrying all messages.
    fn validate(&self) -> Result<(), CoreError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations))
        }
    }
}

// ---------------------------------------------------------------------------
// Rule collector
// ---------------------------------------------------------------------------

/// Accumulates violation messages for a single payload.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.0.push(format!("{field} should not be empty"));
        }
        self
    }

    pub fn max_length(&mut self, field: &str, value: &str, max: u64) -> &mut Self {
        if !value.validate_length(None, Some(max), None) {
            self.0.push(format!(
                "{field} must be shorter than or equal to {max} characters"
            ));
        }
        self
    }

    pub fn min_length(&mut self, field: &str, value: &str, min: u64) -> &mut Self {
        if !value.validate_length(Some(min), None, None) {
            self.0.push(format!(
                "{field} must be longer than or equal to {min} characters"
            ));
        }
        self
    }

    pub fn positive(&mut self, field: &str, value: i64) -> &mut Self {
        if value <= 0 {
            self.0.push(format!("{field} must be a positive number"));
        }
        self
    }

    /// Reports once for the whole list, however many entries fail.
    pub fn each_positive(&mut self, field: &str, values: &[i64]) -> &mut Self {
        if values.iter().any(|v| *v <= 0) {
            self.0
                .push(format!("each value in {field} must be a positive number"));
        }
        self
    }

    /// The name/title rule set shared by all three entities.
    pub fn name_length(&mut self, field: &str, value: &str) -> &mut Self {
        self.max_length(field, value, NAME_MAX_LENGTH)
            .min_length(field, value, NAME_MIN_LENGTH)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
