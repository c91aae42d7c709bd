//! Domain layer error definitions.

use std::fmt;

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId must be a positive integer
    #[error("RoomId must be positive (got {0})")]
    RoomIdNotPositive(i64),

    /// RoomName too long error
    #[error("RoomName cannot exceed {max} characters (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },
}

/// Field constraint that a payload violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field is required
    NotNull,
    /// The field exceeds its maximum length
    Size,
}

impl Constraint {
    /// Constraint name as reported to API clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::NotNull => "NotNull",
            Constraint::Size => "Size",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload failed field validation before reaching persistence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{object_name}.{field}: {constraint}")]
pub struct ValidationError {
    /// Name of the validated object (e.g. `room`)
    pub object_name: &'static str,
    /// Wire name of the offending field
    pub field: &'static str,
    /// Violated constraint
    pub constraint: Constraint,
}

impl ValidationError {
    /// Create a validation error for a missing required field
    pub fn not_null(object_name: &'static str, field: &'static str) -> Self {
        Self {
            object_name,
            field,
            constraint: Constraint::NotNull,
        }
    }

    /// Create a validation error for an oversized field
    pub fn size(object_name: &'static str, field: &'static str) -> Self {
        Self {
            object_name,
            field,
            constraint: Constraint::Size,
        }
    }
}

/// Errors returned by the persistence gateway
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The underlying store failed
    #[error("Storage error: {0}")]
    Storage(String),
}
