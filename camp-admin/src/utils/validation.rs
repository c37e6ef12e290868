//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! stores before any mutation happens.

use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::AVAILABLE_AMENITIES;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: zone, tent spot
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate a length limit, counted in chars.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an integer lower bound (capacity, guests).
pub fn validate_min(value: i32, min: i32, field: &str) -> AppResult<()> {
    if value < min {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be at least {min}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a price: finite and not negative.
pub fn validate_price(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative amount, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an amenity is one of [`AVAILABLE_AMENITIES`].
pub fn validate_amenity(value: &str) -> AppResult<()> {
    if !AVAILABLE_AMENITIES.contains(&value) {
        return Err(AppError::validation(format!("Unknown amenity: {value}"))
            .with_detail("field", "amenities")
            .with_detail("value", value));
    }
    Ok(())
}

/// Trim image URLs, drop blanks and keep the first occurrence of each URL.
pub fn normalize_images(images: Vec<String>) -> AppResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(images.len());
    for raw in images {
        let url = raw.trim();
        if url.is_empty() || out.iter().any(|u| u == url) {
            continue;
        }
        validate_text_len(url, "image url", MAX_URL_LEN)?;
        out.push(url.to_string());
    }
    Ok(out)
}
