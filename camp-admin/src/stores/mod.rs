//! In-memory stores
//!
//! Each store is a cheap-to-clone handle over shared state; clones see the
//! same data. All operations run synchronously and validate their input
//! before mutating anything.

// Location
pub mod tent_spot;
pub mod zone;

// Bookings
pub mod reservation;

// System
pub mod settings;

// Re-exports
pub use reservation::ReservationRepository;
pub use settings::SettingsStore;
pub use tent_spot::TentSpotRepository;
pub use zone::ZoneRepository;

/// User answer to a destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Generate a prefixed id not already taken by `exists`.
pub(crate) fn unique_id(prefix: &str, exists: impl Fn(&str) -> bool) -> String {
    loop {
        let id = shared::util::prefixed_id(prefix);
        if !exists(&id) {
            return id;
        }
    }
}
