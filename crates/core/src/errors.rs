//! Core error types for the fixed asset engine.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! are converted to these types by whichever layer implements the repository
//! traits.

use thiserror::Error;

use crate::fixed_assets::{FixedAssetDateError, PlanComputationErrors};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fixed asset engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("First depreciation date computation failed: {0}")]
    FixedAssetDate(#[from] FixedAssetDateError),

    #[error("First depreciation date computation failed: {0}")]
    FirstDepreciationDates(#[from] PlanComputationErrors),
}

/// Database-agnostic error type for storage operations.
///
/// Uses `String` for all details so storage implementations can convert
/// their own errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
