//! Camping Zone Model

use super::TentSpot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Amenities offered by the zone form checkboxes.
pub const AVAILABLE_AMENITIES: [&str; 9] = [
    "restroom",
    "dishwashing",
    "electricity",
    "parking",
    "viewpoint",
    "wifi",
    "shop",
    "equipment-rental",
    "outdoor-activities",
];

/// Camping zone entity (a bookable campsite area)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampingZone {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price_per_night: f64,
    pub amenities: BTreeSet<String>,
    /// Display order; no duplicate URLs
    pub images: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tent_spots: Vec<TentSpot>,
}

impl CampingZone {
    /// Cover image shown on the zone card
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn find_spot(&self, spot_id: &str) -> Option<&TentSpot> {
        self.tent_spots.iter().find(|s| s.id == spot_id)
    }
}

/// Create zone payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneCreate {
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price_per_night: f64,
    pub amenities: BTreeSet<String>,
    pub images: Vec<String>,
}

impl Default for ZoneCreate {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            capacity: 1,
            price_per_night: 0.0,
            amenities: BTreeSet::new(),
            images: Vec::new(),
        }
    }
}

/// Update zone payload
///
/// `None` keeps the current value. Collections are replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_night: Option<f64>,
    pub amenities: Option<BTreeSet<String>>,
    pub images: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
