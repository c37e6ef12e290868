//! Utility module
//!
//! - [`AppError`] / [`AppResult`] (from shared::error)
//! - logging setup
//! - input validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
