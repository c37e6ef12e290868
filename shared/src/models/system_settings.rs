//! System Settings Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating status of one admin subsystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl SystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Enabled",
            Self::Maintenance => "Under maintenance",
            Self::Inactive => "Closed",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown system status: {other}")),
        }
    }
}

/// The five fixed subsystem keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubsystemKey {
    ZonesManagement,
    ReservationManagement,
    TentSpotManagement,
    PaymentSystem,
    UserRegistration,
}

impl SubsystemKey {
    pub const ALL: [SubsystemKey; 5] = [
        Self::ZonesManagement,
        Self::ReservationManagement,
        Self::TentSpotManagement,
        Self::PaymentSystem,
        Self::UserRegistration,
    ];

    /// Storage key name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZonesManagement => "zonesManagement",
            Self::ReservationManagement => "reservationManagement",
            Self::TentSpotManagement => "tentSpotManagement",
            Self::PaymentSystem => "paymentSystem",
            Self::UserRegistration => "userRegistration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ZonesManagement => "Camping zone management",
            Self::ReservationManagement => "Reservation management",
            Self::TentSpotManagement => "Tent spot management",
            Self::PaymentSystem => "Payment system",
            Self::UserRegistration => "User registration",
        }
    }
}

impl FromStr for SubsystemKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown subsystem: {s}"))
    }
}

/// Subsystem → status map. One field per key, so every key is always present.
///
/// Deserialization fills keys missing from a stored blob with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub zones_management: SystemStatus,
    pub reservation_management: SystemStatus,
    pub tent_spot_management: SystemStatus,
    pub payment_system: SystemStatus,
    pub user_registration: SystemStatus,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            zones_management: SystemStatus::Active,
            reservation_management: SystemStatus::Active,
            tent_spot_management: SystemStatus::Active,
            payment_system: SystemStatus::Maintenance,
            user_registration: SystemStatus::Active,
        }
    }
}

impl SystemSettings {
    pub fn get(&self, key: SubsystemKey) -> SystemStatus {
        match key {
            SubsystemKey::ZonesManagement => self.zones_management,
            SubsystemKey::ReservationManagement => self.reservation_management,
            SubsystemKey::TentSpotManagement => self.tent_spot_management,
            SubsystemKey::PaymentSystem => self.payment_system,
            SubsystemKey::UserRegistration => self.user_registration,
        }
    }

    pub fn set(&mut self, key: SubsystemKey, status: SystemStatus) {
        let slot = match key {
            SubsystemKey::ZonesManagement => &mut self.zones_management,
            SubsystemKey::ReservationManagement => &mut self.reservation_management,
            SubsystemKey::TentSpotManagement => &mut self.tent_spot_management,
            SubsystemKey::PaymentSystem => &mut self.payment_system,
            SubsystemKey::UserRegistration => &mut self.user_registration,
        };
        *slot = status;
    }

    /// `(key, status)` pairs in panel order
    pub fn entries(&self) -> impl Iterator<Item = (SubsystemKey, SystemStatus)> {
        let settings = *self;
        SubsystemKey::ALL
            .into_iter()
            .map(move |key| (key, settings.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SystemSettings::default();
        assert_eq!(settings.get(SubsystemKey::PaymentSystem), SystemStatus::Maintenance);
        assert_eq!(settings.get(SubsystemKey::UserRegistration), SystemStatus::Active);
    }

    #[test]
    fn test_serialize_has_all_five_keys() {
        let json = serde_json::to_value(SystemSettings::default()).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 5);
        for key in SubsystemKey::ALL {
            assert!(map.contains_key(key.as_str()), "missing {}", key.as_str());
        }
        assert_eq!(json["paymentSystem"], "maintenance");
    }

    #[test]
    fn test_partial_blob_filled_from_defaults() {
        let settings: SystemSettings =
            serde_json::from_str(r#"{"zonesManagement":"inactive"}"#).unwrap();
        assert_eq!(settings.zones_management, SystemStatus::Inactive);
        assert_eq!(settings.payment_system, SystemStatus::Maintenance);
    }

    #[test]
    fn test_set_and_entries() {
        let mut settings = SystemSettings::default();
        settings.set(SubsystemKey::TentSpotManagement, SystemStatus::Inactive);
        let entries: Vec<_> = settings.entries().collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries[2],
            (SubsystemKey::TentSpotManagement, SystemStatus::Inactive)
        );
    }

    #[test]
    fn test_subsystem_key_parse() {
        assert_eq!(
            "paymentSystem".parse::<SubsystemKey>(),
            Ok(SubsystemKey::PaymentSystem)
        );
        assert!("billing".parse::<SubsystemKey>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SubsystemKey::PaymentSystem.label(), "Payment system");
        assert_eq!(SystemStatus::Maintenance.label(), "Under maintenance");
    }
}
