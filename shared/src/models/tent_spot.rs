//! Tent Spot Model

use super::TentSize;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Map coordinates, reserved for positioning spots on a zone map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPosition {
    pub x: f64,
    pub y: f64,
}

/// Tent spot entity (an individually bookable place inside a zone)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TentSpot {
    pub id: String,
    pub name: String,
    pub size: Arc<TentSize>,
    pub capacity: i32,
    pub price_per_night: f64,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<SpotPosition>,
}

/// Create tent spot payload
///
/// `capacity` and `price_per_night` default to the selected size's
/// `min_capacity` and `base_price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TentSpotCreate {
    pub name: String,
    pub size_id: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_night: Option<f64>,
    pub is_active: Option<bool>,
    pub position: Option<SpotPosition>,
}

/// Update tent spot payload
///
/// A new `size_id` resets capacity and price to the size defaults before
/// any explicit `capacity` / `price_per_night` in the same payload applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TentSpotUpdate {
    pub name: Option<String>,
    pub size_id: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_night: Option<f64>,
    pub is_active: Option<bool>,
    pub position: Option<SpotPosition>,
}
