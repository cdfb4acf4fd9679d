//! Per-field input validation.
//!
//! Rules are plain method calls on a [`FieldCheck`] accumulator, evaluated
//! in order. Every violation is collected so the client sees all of them
//! in one response instead of fixing fields one round-trip at a time.

use serde::Serialize;
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::DbId;

/// Allowed values for a task's `priority`.
pub const TASK_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// The kind of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
    OneOf,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

/// Accumulates violations for one input value.
#[derive(Debug, Default)]
pub struct FieldCheck {
    violations: Vec<FieldViolation>,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must contain at least one non-whitespace character.
    pub fn required_text(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, Rule::Required, format!("{field} is required"));
        }
        self
    }

    /// The field must reference a row, i.e. hold a positive id.
    ///
    /// A missing id decodes to `0`, so this is also the presence check.
    pub fn required_id(&mut self, field: &'static str, value: DbId) -> &mut Self {
        if value <= 0 {
            self.push(
                field,
                Rule::Required,
                format!("{field} is required and must be a positive id"),
            );
        }
        self
    }

    /// The field must be a syntactically valid email address.
    ///
    /// Blank values are skipped; pair with [`required_text`](Self::required_text).
    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && !value.validate_email() {
            self.push(
                field,
                Rule::Email,
                format!("{field} must be a valid email address"),
            );
        }
        self
    }

    /// The field must equal one of `allowed` (case-sensitive).
    ///
    /// Blank values are skipped; pair with [`required_text`](Self::required_text).
    pub fn one_of(&mut self, field: &'static str, value: &str, allowed: &[&str]) -> &mut Self {
        if !value.trim().is_empty() && !allowed.contains(&value) {
            self.push(
                field,
                Rule::OneOf,
                format!("{field} must be one of: {}", allowed.join(", ")),
            );
        }
        self
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when no rule failed, otherwise every collected violation.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self.violations))
        }
    }

    fn push(&mut self, field: &'static str, rule: Rule, message: String) {
        self.violations.push(FieldViolation {
            field,
            rule,
            message,
        });
    }
}
