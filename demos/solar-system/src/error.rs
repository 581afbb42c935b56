//! Error types for the orrery's controls and catalog

use thiserror::Error;

/// Result type for control edits
pub type ControlResult<T> = Result<T, ControlError>;

/// A rejected edit from the UI. The state it targeted is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("No body at index {0}")]
    UnknownIndex(f32),

    #[error("Speed is not a finite number: {0}")]
    NonFiniteSpeed(f32),
}

/// Inconsistent body catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Expected {expected} bodies, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("Duplicate body name: {0}")]
    DuplicateName(&'static str),

    #[error("{name}: {field} must be positive")]
    NonPositive { name: &'static str, field: &'static str },

    #[error("{name}: base speed {speed} outside slider range")]
    SpeedOutOfRange { name: &'static str, speed: f32 },

    #[error("{name}: ring {inner}..{outer} does not clear the body")]
    BadRing { name: &'static str, inner: f32, outer: f32 },
}
