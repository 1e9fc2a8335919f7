//! Fixed Asset Core - Domain entities, services, and traits.
//!
//! This crate derives the first depreciation date of a fixed asset under its
//! economic, fiscal and IFRS depreciation plans. It is database-agnostic and
//! defines the repository traits a storage layer must implement.

pub mod constants;
pub mod errors;
pub mod fixed_assets;
pub mod utils;

// Re-export common types from the fixed asset module
pub use fixed_assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
