//! Tent Spot Repository
//!
//! Spots live inside their zone's `tent_spots`; this repository reaches them
//! through [`ZoneRepository`]. Sizes come from a fixed reference list shared
//! by every spot.

use super::{Confirmation, ZoneRepository, unique_id};
use crate::utils::validation::{MAX_NAME_LEN, validate_price, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{TentSize, TentSpot, TentSpotCreate, TentSpotUpdate};
use std::sync::Arc;

const ID_PREFIX: &str = "spot";

#[derive(Debug, Clone)]
pub struct TentSpotRepository {
    zones: ZoneRepository,
    sizes: Arc<[Arc<TentSize>]>,
}

impl TentSpotRepository {
    pub fn new(zones: ZoneRepository, sizes: Vec<Arc<TentSize>>) -> Self {
        Self {
            zones,
            sizes: sizes.into(),
        }
    }

    /// Size reference list, in select-box order
    pub fn sizes(&self) -> &[Arc<TentSize>] {
        &self.sizes
    }

    pub fn find_size(&self, size_id: &str) -> AppResult<Arc<TentSize>> {
        self.sizes
            .iter()
            .find(|s| s.id == size_id)
            .cloned()
            .ok_or_else(|| AppError::size_not_found(size_id))
    }

    /// Spots of one zone, in insertion order
    pub fn list(&self, zone_id: &str) -> AppResult<Vec<TentSpot>> {
        self.zones
            .find_by_id(zone_id)
            .map(|zone| zone.tent_spots)
            .ok_or_else(|| AppError::zone_not_found(zone_id))
    }

    pub fn find_by_id(&self, zone_id: &str, spot_id: &str) -> AppResult<Option<TentSpot>> {
        let zone = self
            .zones
            .find_by_id(zone_id)
            .ok_or_else(|| AppError::zone_not_found(zone_id))?;
        Ok(zone.find_spot(spot_id).cloned())
    }

    /// Look a spot up by id across every zone. Returns `(zone_id, spot)`.
    pub fn locate(&self, spot_id: &str) -> Option<(String, TentSpot)> {
        self.zones.with_zones(|zones| {
            zones.iter().find_map(|zone| {
                zone.find_spot(spot_id)
                    .map(|spot| (zone.id.clone(), spot.clone()))
            })
        })
    }

    /// Create a spot in `zone_id`.
    ///
    /// Capacity and price start from the size's defaults; explicit values in
    /// `data` override them, and capacity must stay within the size bounds.
    pub fn create(&self, zone_id: &str, data: TentSpotCreate) -> AppResult<TentSpot> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        let size_id = data.size_id.as_deref().ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "Tent size must be selected")
                .with_detail("field", "size")
        })?;
        let size = self.find_size(size_id)?;

        let capacity = data.capacity.unwrap_or(size.min_capacity);
        if !size.allows_capacity(capacity) {
            return Err(capacity_out_of_range(&size, capacity));
        }
        let price_per_night = data.price_per_night.unwrap_or(size.base_price);
        validate_price(price_per_night, "pricePerNight")?;

        let spot = self.zones.with_zone_mut(zone_id, |zone| {
            let id = unique_id(ID_PREFIX, |candidate| zone.find_spot(candidate).is_some());
            let spot = TentSpot {
                id,
                name: data.name,
                size,
                capacity,
                price_per_night,
                is_active: data.is_active.unwrap_or(true),
                position: data.position,
            };
            zone.tent_spots.push(spot.clone());
            Ok(spot)
        })?;

        tracing::info!(zone_id = %zone_id, spot_id = %spot.id, size = %spot.size.id, "Tent spot created");
        Ok(spot)
    }

    /// Switch a spot to another size, resetting capacity and price to that
    /// size's `min_capacity` and `base_price`.
    pub fn change_size(&self, zone_id: &str, spot_id: &str, size_id: &str) -> AppResult<TentSpot> {
        let size = self.find_size(size_id)?;
        let spot = self.with_spot_mut(zone_id, spot_id, |spot| {
            apply_size(spot, size);
            Ok(spot.clone())
        })?;

        tracing::info!(zone_id = %zone_id, spot_id = %spot_id, size = %size_id, "Tent spot size changed");
        Ok(spot)
    }

    /// Update a spot. A `size_id` resets capacity and price first; explicit
    /// capacity is then taken as-is, without re-checking the size bounds.
    pub fn update(&self, zone_id: &str, spot_id: &str, data: TentSpotUpdate) -> AppResult<TentSpot> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(price) = data.price_per_night {
            validate_price(price, "pricePerNight")?;
        }
        let size = data.size_id.as_deref().map(|id| self.find_size(id)).transpose()?;

        let spot = self.with_spot_mut(zone_id, spot_id, |spot| {
            if let Some(size) = size {
                apply_size(spot, size);
            }
            if let Some(name) = data.name {
                spot.name = name;
            }
            if let Some(capacity) = data.capacity {
                spot.capacity = capacity;
            }
            if let Some(price) = data.price_per_night {
                spot.price_per_night = price;
            }
            if let Some(is_active) = data.is_active {
                spot.is_active = is_active;
            }
            if let Some(position) = data.position {
                spot.position = Some(position);
            }
            Ok(spot.clone())
        })?;

        tracing::info!(zone_id = %zone_id, spot_id = %spot_id, "Tent spot updated");
        Ok(spot)
    }

    /// Delete a spot. An absent spot or a declined prompt is a no-op.
    pub fn delete(&self, zone_id: &str, spot_id: &str, confirmation: Confirmation) -> AppResult<bool> {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        let removed = self.zones.with_zone_mut(zone_id, |zone| {
            let before = zone.tent_spots.len();
            zone.tent_spots.retain(|s| s.id != spot_id);
            Ok(zone.tent_spots.len() != before)
        })?;
        if removed {
            tracing::info!(zone_id = %zone_id, spot_id = %spot_id, "Tent spot deleted");
        }
        Ok(removed)
    }

    fn with_spot_mut<R>(
        &self,
        zone_id: &str,
        spot_id: &str,
        f: impl FnOnce(&mut TentSpot) -> AppResult<R>,
    ) -> AppResult<R> {
        self.zones.with_zone_mut(zone_id, |zone| {
            let spot = zone
                .tent_spots
                .iter_mut()
                .find(|s| s.id == spot_id)
                .ok_or_else(|| AppError::spot_not_found(spot_id))?;
            f(spot)
        })
    }
}

fn apply_size(spot: &mut TentSpot, size: Arc<TentSize>) {
    spot.capacity = size.min_capacity;
    spot.price_per_night = size.base_price;
    spot.size = size;
}

fn capacity_out_of_range(size: &TentSize, capacity: i32) -> AppError {
    AppError::with_message(
        ErrorCode::CapacityOutOfRange,
        format!(
            "Capacity {capacity} is outside {} ({}-{})",
            size.display_name, size.min_capacity, size.max_capacity
        ),
    )
    .with_detail("field", "capacity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use shared::models::ZoneCreate;
    use std::collections::HashSet;

    fn setup() -> (TentSpotRepository, String) {
        let zones = ZoneRepository::default();
        let zone = zones
            .create(ZoneCreate {
                name: "Riverside".to_string(),
                ..Default::default()
            })
            .unwrap();
        (TentSpotRepository::new(zones, seed::tent_sizes()), zone.id)
    }

    fn spot(name: &str, size: &str) -> TentSpotCreate {
        TentSpotCreate {
            name: name.to_string(),
            size_id: Some(size.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_defaults_from_size() {
        let (repo, zone_id) = setup();
        let medium = repo.find_size("medium").unwrap();
        let created = repo.create(&zone_id, spot("A1", "medium")).unwrap();
        assert!(created.id.starts_with("spot_"));
        assert_eq!(created.capacity, medium.min_capacity);
        assert_eq!(created.price_per_night, medium.base_price);
        assert!(created.is_active);
        assert_eq!(repo.list(&zone_id).unwrap(), vec![created]);
    }

    #[test]
    fn test_create_accepts_overrides_within_bounds() {
        let (repo, zone_id) = setup();
        let data = TentSpotCreate {
            capacity: Some(4),
            price_per_night: Some(450.0),
            ..spot("A2", "medium")
        };
        let created = repo.create(&zone_id, data).unwrap();
        assert_eq!(created.capacity, 4);
        assert_eq!(created.price_per_night, 450.0);
    }

    #[test]
    fn test_create_validation() {
        let (repo, zone_id) = setup();

        let err = repo.create(&zone_id, spot("", "small")).unwrap_err();
        assert!(err.is_validation());

        let no_size = TentSpotCreate {
            name: "A1".to_string(),
            ..Default::default()
        };
        assert!(repo.create(&zone_id, no_size).unwrap_err().is_validation());

        let err = repo.create(&zone_id, spot("A1", "huge")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TentSizeNotFound);

        let too_many = TentSpotCreate {
            capacity: Some(9),
            ..spot("A1", "small")
        };
        let err = repo.create(&zone_id, too_many).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityOutOfRange);

        let err = repo.create("zone_missing", spot("A1", "small")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);

        assert!(repo.list(&zone_id).unwrap().is_empty());
    }

    #[test]
    fn test_sequential_creates_have_distinct_ids() {
        let (repo, zone_id) = setup();
        let ids: HashSet<String> = (0..100)
            .map(|i| repo.create(&zone_id, spot(&format!("S{i}"), "small")).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_change_size_resets_capacity_and_price() {
        let (repo, zone_id) = setup();
        let data = TentSpotCreate {
            capacity: Some(2),
            price_per_night: Some(999.0),
            ..spot("A1", "small")
        };
        let created = repo.create(&zone_id, data).unwrap();

        let large = repo.find_size("large").unwrap();
        let changed = repo.change_size(&zone_id, &created.id, "large").unwrap();
        assert_eq!(changed.capacity, large.min_capacity);
        assert_eq!(changed.price_per_night, large.base_price);
        assert!(Arc::ptr_eq(&changed.size, &large));

        let err = repo.change_size(&zone_id, &created.id, "huge").unwrap_err();
        assert_eq!(err.code, ErrorCode::TentSizeNotFound);
        assert_eq!(repo.find_by_id(&zone_id, &created.id).unwrap().unwrap(), changed);
    }

    #[test]
    fn test_update_capacity_not_revalidated() {
        let (repo, zone_id) = setup();
        let created = repo.create(&zone_id, spot("A1", "small")).unwrap();
        let patch = TentSpotUpdate {
            capacity: Some(12),
            ..Default::default()
        };
        let once = repo.update(&zone_id, &created.id, patch.clone()).unwrap();
        let twice = repo.update(&zone_id, &created.id, patch).unwrap();
        assert_eq!(once.capacity, 12);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_size_then_explicit_price() {
        let (repo, zone_id) = setup();
        let created = repo.create(&zone_id, spot("A1", "small")).unwrap();
        let patch = TentSpotUpdate {
            size_id: Some("family".to_string()),
            price_per_night: Some(1000.0),
            ..Default::default()
        };
        let updated = repo.update(&zone_id, &created.id, patch).unwrap();
        assert_eq!(updated.size.id, "family");
        assert_eq!(updated.capacity, updated.size.min_capacity);
        assert_eq!(updated.price_per_night, 1000.0);
    }

    #[test]
    fn test_update_unknown_spot() {
        let (repo, zone_id) = setup();
        let err = repo
            .update(&zone_id, "spot_missing", TentSpotUpdate::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TentSpotNotFound);
    }

    #[test]
    fn test_unknown_zone_is_zone_not_found() {
        let (repo, _) = setup();
        let update = repo
            .update("zone_missing", "spot_a1", TentSpotUpdate::default())
            .unwrap_err();
        assert_eq!(update.code, ErrorCode::ZoneNotFound);

        let delete = repo
            .delete("zone_missing", "spot_a1", Confirmation::Confirmed)
            .unwrap_err();
        assert_eq!(delete.code, ErrorCode::ZoneNotFound);

        let create = repo.create("zone_missing", spot("A1", "small")).unwrap_err();
        assert_eq!(create.code, ErrorCode::ZoneNotFound);
    }

    #[test]
    fn test_delete() {
        let (repo, zone_id) = setup();
        let created = repo.create(&zone_id, spot("A1", "small")).unwrap();

        assert!(!repo.delete(&zone_id, &created.id, Confirmation::Declined).unwrap());
        assert!(repo.delete(&zone_id, &created.id, Confirmation::Confirmed).unwrap());
        assert!(repo.list(&zone_id).unwrap().is_empty());
        assert!(!repo.delete(&zone_id, &created.id, Confirmation::Confirmed).unwrap());
    }

    #[test]
    fn test_locate_across_zones() {
        let (repo, zone_id) = setup();
        let created = repo.create(&zone_id, spot("A1", "small")).unwrap();
        let (found_zone, found) = repo.locate(&created.id).unwrap();
        assert_eq!(found_zone, zone_id);
        assert_eq!(found, created);
        assert!(repo.locate("spot_missing").is_none());
    }

    #[test]
    fn test_sizes_are_shared() {
        let (repo, zone_id) = setup();
        let a = repo.create(&zone_id, spot("A1", "small")).unwrap();
        let b = repo.create(&zone_id, spot("A2", "small")).unwrap();
        assert!(Arc::ptr_eq(&a.size, &b.size));
    }
}
