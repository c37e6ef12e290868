//! Admin state
//!
//! Owns every store plus the session guard. Protected views are only handed
//! out through [`AdminState::open_tab`], which requires a session.

use crate::auth::SessionGuard;
use crate::core::Config;
use crate::seed;
use crate::storage::{KeyValueStore, RedbStore};
use crate::stores::{ReservationRepository, SettingsStore, TentSpotRepository, ZoneRepository};
use crate::utils::{AppError, AppResult};
use shared::models::TentSpot;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Zones,
    Reservations,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [Self::Zones, Self::Reservations, Self::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zones => "zones",
            Self::Reservations => "reservations",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| AppError::invalid_request(format!("Unknown tab: {s}")))
    }
}

/// Stores reachable from an opened tab
#[derive(Debug, Clone, Copy)]
pub enum AdminView<'a> {
    /// Zone management; each zone's spots go through `spots`
    Zones {
        zones: &'a ZoneRepository,
        spots: &'a TentSpotRepository,
    },
    Reservations(&'a ReservationRepository),
    Settings(&'a SettingsStore),
}

#[derive(Debug)]
pub struct AdminState {
    session: SessionGuard,
    zones: ZoneRepository,
    spots: TentSpotRepository,
    reservations: ReservationRepository,
    settings: SettingsStore,
}

impl AdminState {
    /// Open the redb file from `config` and build the state on top of it
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let path = config.storage_path();
        let storage = RedbStore::open(&path)?;
        tracing::info!(path = %path.display(), "Storage opened");
        Self::with_storage(config, Arc::new(storage))
    }

    /// Build the state over an injected storage backend.
    ///
    /// Loads seed data, the last saved settings and any stored session.
    pub fn with_storage(config: &Config, storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let sizes = seed::tent_sizes();
        let zones = ZoneRepository::new(seed::zones(&sizes));
        let spots = TentSpotRepository::new(zones.clone(), sizes);
        let reservations = ReservationRepository::new(seed::reservations())?;
        let settings = SettingsStore::load(storage.clone())?;

        let mut session = SessionGuard::new(storage, config.credentials());
        session.restore()?;

        tracing::info!(
            zones = zones.len(),
            authenticated = session.is_authenticated(),
            "Admin state initialized"
        );
        Ok(Self {
            session,
            zones,
            spots,
            reservations,
            settings,
        })
    }

    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionGuard {
        &mut self.session
    }

    /// Open a tab. Requires a session; the role is not checked.
    pub fn open_tab(&self, tab: AdminTab) -> AppResult<AdminView<'_>> {
        self.session.require_auth()?;
        tracing::debug!(tab = %tab, "Tab opened");
        Ok(match tab {
            AdminTab::Zones => AdminView::Zones {
                zones: &self.zones,
                spots: &self.spots,
            },
            AdminTab::Reservations => AdminView::Reservations(&self.reservations),
            AdminTab::Settings => AdminView::Settings(&self.settings),
        })
    }

    /// Resolve a reservation's weak spot reference.
    ///
    /// `Ok(None)` when the reservation has no reference or the spot is gone.
    pub fn reservation_spot(&self, reservation_id: &str) -> AppResult<Option<(String, TentSpot)>> {
        self.session.require_auth()?;
        let reservation = self
            .reservations
            .find_by_id(reservation_id)
            .ok_or_else(|| AppError::reservation_not_found(reservation_id))?;
        Ok(reservation
            .tent_spot_id
            .as_deref()
            .and_then(|spot_id| self.spots.locate(spot_id)))
    }
}
