//! Tent Size Model

use serde::{Deserialize, Serialize};

/// Tent size reference record (read-only, shared by many spots)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TentSize {
    pub id: String,
    /// Internal key
    pub name: String,
    pub display_name: String,
    pub min_capacity: i32,
    pub max_capacity: i32,
    pub base_price: f64,
}

impl TentSize {
    pub fn allows_capacity(&self, capacity: i32) -> bool {
        (self.min_capacity..=self.max_capacity).contains(&capacity)
    }
}
