//! Shared types for the campsite admin
//!
//! Domain models, error types and id/time helpers used by `camp-admin`
//! and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
