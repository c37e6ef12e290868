//! System Settings Store
//!
//! Toggles change the in-memory map immediately; only [`SettingsStore::save`]
//! writes it to durable storage.

use crate::storage::{KeyValueStore, StorageError, SYSTEM_SETTINGS_KEY};
use crate::utils::AppResult;
use parking_lot::RwLock;
use shared::models::{SubsystemKey, SystemSettings, SystemStatus};
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    current: Arc<RwLock<SystemSettings>>,
    /// Last value written to (or read from) storage
    saved: Arc<RwLock<Option<SystemSettings>>>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &*self.current.read())
            .field("saved", &*self.saved.read())
            .finish()
    }
}

impl SettingsStore {
    /// Start from defaults without reading storage
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            current: Arc::new(RwLock::new(SystemSettings::default())),
            saved: Arc::new(RwLock::new(None)),
        }
    }

    /// Start from the last saved map, or defaults if nothing was saved.
    ///
    /// An undecodable blob is ignored; the next `save` overwrites it.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let saved = match storage.get_json::<SystemSettings>(SYSTEM_SETTINGS_KEY) {
            Ok(saved) => saved,
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(error = %e, "Ignoring unreadable system settings");
                None
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(found = saved.is_some(), "System settings loaded");
        Ok(Self {
            storage,
            current: Arc::new(RwLock::new(saved.unwrap_or_default())),
            saved: Arc::new(RwLock::new(saved)),
        })
    }

    pub fn get(&self) -> SystemSettings {
        *self.current.read()
    }

    pub fn status(&self, key: SubsystemKey) -> SystemStatus {
        self.current.read().get(key)
    }

    /// In-memory change only
    pub fn set_status(&self, key: SubsystemKey, status: SystemStatus) {
        self.current.write().set(key, status);
        tracing::debug!(subsystem = key.as_str(), status = %status, "System status changed");
    }

    /// Whether the in-memory map differs from what storage holds
    pub fn has_unsaved_changes(&self) -> bool {
        let current = self.get();
        self.saved.read().map_or(true, |saved| saved != current)
    }

    /// Write the full map to storage. Last writer wins.
    pub fn save(&self) -> AppResult<SystemSettings> {
        let settings = self.get();
        self.storage.put_json(SYSTEM_SETTINGS_KEY, &settings)?;
        *self.saved.write() = Some(settings);

        tracing::info!(
            zones = %settings.zones_management,
            reservations = %settings.reservation_management,
            tent_spots = %settings.tent_spot_management,
            payment = %settings.payment_system,
            registration = %settings.user_registration,
            "System settings saved"
        );
        Ok(settings)
    }
}
