//! Zone Repository

use super::{Confirmation, unique_id};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, normalize_images, validate_amenity, validate_min,
    validate_optional_text, validate_price, validate_required_text, validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{CampingZone, ZoneCreate, ZoneUpdate};
use std::sync::Arc;

const ID_PREFIX: &str = "zone";

/// Camping zones in insertion order
#[derive(Clone, Default)]
pub struct ZoneRepository {
    zones: Arc<RwLock<Vec<CampingZone>>>,
}

impl std::fmt::Debug for ZoneRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneRepository")
            .field("zones_count", &self.zones.read().len())
            .finish()
    }
}

impl ZoneRepository {
    pub fn new(seed: Vec<CampingZone>) -> Self {
        Self {
            zones: Arc::new(RwLock::new(seed)),
        }
    }

    /// All zones, insertion order
    pub fn list(&self) -> Vec<CampingZone> {
        self.zones.read().clone()
    }

    pub fn len(&self) -> usize {
        self.zones.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.read().is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<CampingZone> {
        self.zones.read().iter().find(|z| z.id == id).cloned()
    }

    /// Create a new zone
    pub fn create(&self, data: ZoneCreate) -> AppResult<CampingZone> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_text_len(&data.description, "description", MAX_NOTE_LEN)?;
        validate_min(data.capacity, 1, "capacity")?;
        validate_price(data.price_per_night, "pricePerNight")?;
        for amenity in &data.amenities {
            validate_amenity(amenity)?;
        }
        let images = normalize_images(data.images)?;

        let mut zones = self.zones.write();
        let id = unique_id(ID_PREFIX, |candidate| zones.iter().any(|z| z.id == candidate));
        let zone = CampingZone {
            id,
            name: data.name,
            description: data.description,
            capacity: data.capacity,
            price_per_night: data.price_per_night,
            amenities: data.amenities,
            images,
            is_active: true,
            created_at: chrono::Utc::now(),
            tent_spots: Vec::new(),
        };
        zones.push(zone.clone());

        tracing::info!(zone_id = %zone.id, name = %zone.name, "Zone created");
        Ok(zone)
    }

    /// Update a zone. Fields left `None` keep their value; collections are
    /// replaced wholesale.
    pub fn update(&self, id: &str, data: ZoneUpdate) -> AppResult<CampingZone> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;
        if let Some(capacity) = data.capacity {
            validate_min(capacity, 1, "capacity")?;
        }
        if let Some(price) = data.price_per_night {
            validate_price(price, "pricePerNight")?;
        }
        if let Some(amenities) = &data.amenities {
            for amenity in amenities {
                validate_amenity(amenity)?;
            }
        }
        let images = data.images.map(normalize_images).transpose()?;

        let updated = self.with_zone_mut(id, |zone| {
            if let Some(name) = data.name {
                zone.name = name;
            }
            if let Some(description) = data.description {
                zone.description = description;
            }
            if let Some(capacity) = data.capacity {
                zone.capacity = capacity;
            }
            if let Some(price) = data.price_per_night {
                zone.price_per_night = price;
            }
            if let Some(amenities) = data.amenities {
                zone.amenities = amenities;
            }
            if let Some(images) = images {
                zone.images = images;
            }
            if let Some(is_active) = data.is_active {
                zone.is_active = is_active;
            }
            Ok(zone.clone())
        })?;

        tracing::info!(zone_id = %id, "Zone updated");
        Ok(updated)
    }

    /// Delete a zone together with its tent spots.
    ///
    /// Returns `false` when the prompt was declined or the id is absent.
    pub fn delete(&self, id: &str, confirmation: Confirmation) -> bool {
        if !confirmation.is_confirmed() {
            tracing::debug!(zone_id = %id, "Zone delete declined");
            return false;
        }
        let mut zones = self.zones.write();
        let before = zones.len();
        zones.retain(|z| z.id != id);
        let removed = zones.len() != before;
        if removed {
            tracing::info!(zone_id = %id, "Zone deleted");
        }
        removed
    }

    /// Append an image URL; duplicates are rejected.
    pub fn add_image(&self, id: &str, url: &str) -> AppResult<CampingZone> {
        let url = url.trim();
        validate_required_text(url, "image url", MAX_URL_LEN)?;
        self.with_zone_mut(id, |zone| {
            if zone.images.iter().any(|u| u == url) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateImage,
                    format!("Image {url} is already attached"),
                ));
            }
            zone.images.push(url.to_string());
            Ok(zone.clone())
        })
    }

    /// Remove the image at display position `index`.
    pub fn remove_image(&self, id: &str, index: usize) -> AppResult<CampingZone> {
        self.with_zone_mut(id, |zone| {
            if index >= zone.images.len() {
                return Err(AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    format!("Image index {index} out of range"),
                ));
            }
            zone.images.remove(index);
            Ok(zone.clone())
        })
    }

    /// Check or uncheck an amenity from the fixed catalogue.
    pub fn set_amenity(&self, id: &str, amenity: &str, enabled: bool) -> AppResult<CampingZone> {
        validate_amenity(amenity)?;
        self.with_zone_mut(id, |zone| {
            if enabled {
                zone.amenities.insert(amenity.to_string());
            } else {
                zone.amenities.remove(amenity);
            }
            Ok(zone.clone())
        })
    }

    /// Run `f` on the zone with `id` under the write lock.
    ///
    /// If `f` fails the zone is left as `f` left it, so `f` must validate
    /// before it mutates.
    pub(crate) fn with_zone_mut<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut CampingZone) -> AppResult<R>,
    ) -> AppResult<R> {
        let mut zones = self.zones.write();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| AppError::zone_not_found(id))?;
        f(zone)
    }

    /// Run `f` over every zone under the read lock.
    pub(crate) fn with_zones<R>(&self, f: impl FnOnce(&[CampingZone]) -> R) -> R {
        f(&self.zones.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    fn draft(name: &str) -> ZoneCreate {
        ZoneCreate {
            name: name.to_string(),
            description: "Quiet spot by the stream".to_string(),
            capacity: 6,
            price_per_night: 800.0,
            amenities: BTreeSet::from(["parking".to_string()]),
            images: vec!["https://img.example/1.jpg".to_string()],
        }
    }

    #[test]
    fn test_create_sets_defaults() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();
        assert!(zone.id.starts_with("zone_"));
        assert!(zone.is_active);
        assert!(zone.tent_spots.is_empty());
        assert_eq!(repo.list(), vec![zone]);
    }

    #[test]
    fn test_create_rejects_empty_name_without_mutation() {
        let repo = ZoneRepository::default();
        let err = repo.create(draft("  ")).unwrap_err();
        assert!(err.is_validation());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_create_dedupes_images() {
        let repo = ZoneRepository::default();
        let mut data = draft("Bamboo");
        data.images.push("https://img.example/1.jpg".to_string());
        let zone = repo.create(data).unwrap();
        assert_eq!(zone.images, vec!["https://img.example/1.jpg"]);
    }

    #[test]
    fn test_sequential_creates_have_distinct_ids() {
        let repo = ZoneRepository::default();
        let ids: HashSet<String> = (0..200)
            .map(|i| repo.create(draft(&format!("Zone {i}"))).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let repo = ZoneRepository::default();
        let names = ["C", "A", "B"];
        for name in names {
            repo.create(draft(name)).unwrap();
        }
        let listed: Vec<String> = repo.list().into_iter().map(|z| z.name).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_update_merges_and_is_idempotent() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();
        let patch = ZoneUpdate {
            price_per_night: Some(950.0),
            images: Some(vec!["https://img.example/2.jpg".to_string()]),
            ..Default::default()
        };

        let once = repo.update(&zone.id, patch.clone()).unwrap();
        let twice = repo.update(&zone.id, patch).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.name, "Riverside");
        assert_eq!(once.price_per_night, 950.0);
        assert_eq!(once.images, vec!["https://img.example/2.jpg"]);
        assert_eq!(once.created_at, zone.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let repo = ZoneRepository::default();
        let err = repo.update("zone_missing", ZoneUpdate::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZoneNotFound);
    }

    #[test]
    fn test_update_empty_name_leaves_zone_untouched() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();
        let patch = ZoneUpdate {
            name: Some(String::new()),
            capacity: Some(10),
            ..Default::default()
        };
        assert!(repo.update(&zone.id, patch).is_err());
        assert_eq!(repo.find_by_id(&zone.id).unwrap(), zone);
    }

    #[test]
    fn test_delete() {
        let repo = ZoneRepository::default();
        let keep = repo.create(draft("Keep")).unwrap();
        let gone = repo.create(draft("Gone")).unwrap();

        assert!(!repo.delete(&gone.id, Confirmation::Declined));
        assert_eq!(repo.len(), 2);

        assert!(repo.delete(&gone.id, Confirmation::Confirmed));
        assert!(repo.list().iter().all(|z| z.id != gone.id));

        let before = repo.list();
        assert!(!repo.delete("zone_missing", Confirmation::Confirmed));
        assert_eq!(repo.list(), before);
        assert_eq!(before, vec![keep]);
    }

    #[test]
    fn test_image_helpers() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();

        let zone = repo.add_image(&zone.id, " https://img.example/2.jpg ").unwrap();
        assert_eq!(zone.images.len(), 2);
        assert_eq!(zone.cover_image(), Some("https://img.example/1.jpg"));

        let err = repo.add_image(&zone.id, "https://img.example/2.jpg").unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateImage);

        let zone = repo.remove_image(&zone.id, 0).unwrap();
        assert_eq!(zone.images, vec!["https://img.example/2.jpg"]);
        assert!(repo.remove_image(&zone.id, 5).is_err());
    }

    #[test]
    fn test_set_amenity() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();
        let zone = repo.set_amenity(&zone.id, "wifi", true).unwrap();
        assert!(zone.amenities.contains("wifi"));
        let zone = repo.set_amenity(&zone.id, "parking", false).unwrap();
        assert_eq!(zone.amenities, BTreeSet::from(["wifi".to_string()]));
    }

    #[test]
    fn test_unknown_amenity_rejected() {
        let repo = ZoneRepository::default();
        let mut data = draft("Riverside");
        data.amenities.insert("hot-tub".to_string());
        assert_eq!(
            repo.create(data).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
        assert!(repo.is_empty());

        let zone = repo.create(draft("Riverside")).unwrap();
        let err = repo.set_amenity(&zone.id, "hot-tub", true).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let patch = ZoneUpdate {
            amenities: Some(BTreeSet::from(["sauna".to_string()])),
            ..Default::default()
        };
        assert!(repo.update(&zone.id, patch).unwrap_err().is_validation());
        assert_eq!(repo.find_by_id(&zone.id).unwrap(), zone);
    }

    #[test]
    fn test_toggle_active() {
        let repo = ZoneRepository::default();
        let zone = repo.create(draft("Riverside")).unwrap();

        let off = ZoneUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let disabled = repo.update(&zone.id, off).unwrap();
        assert!(!disabled.is_active);
        assert_eq!(disabled.name, zone.name);
        assert!(!repo.find_by_id(&zone.id).unwrap().is_active);

        let on = ZoneUpdate {
            is_active: Some(true),
            ..Default::default()
        };
        assert!(repo.update(&zone.id, on).unwrap().is_active);
    }
}
