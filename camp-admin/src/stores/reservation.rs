//! Reservation Repository
//!
//! Reservations arrive from the public booking flow; the admin can only
//! browse them and change their status.

use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{Reservation, ReservationFilter, ReservationStatus};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ReservationRepository {
    reservations: Arc<RwLock<Vec<Reservation>>>,
}

impl std::fmt::Debug for ReservationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationRepository")
            .field("reservations_count", &self.reservations.read().len())
            .finish()
    }
}

impl ReservationRepository {
    /// Load reservations, rejecting duplicate ids and malformed stays.
    pub fn new(seed: Vec<Reservation>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for reservation in &seed {
            if !seen.insert(reservation.id.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::AlreadyExists,
                    format!("Duplicate reservation id {}", reservation.id),
                ));
            }
            validate(reservation)?;
        }
        Ok(Self {
            reservations: Arc::new(RwLock::new(seed)),
        })
    }

    /// Reservations matching `filter`, in original order
    pub fn list(&self, filter: &ReservationFilter) -> Vec<Reservation> {
        let matched: Vec<Reservation> = self
            .reservations
            .read()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        tracing::debug!(query = %filter.query, count = matched.len(), "Reservations filtered");
        matched
    }

    /// Number of reservations matching `filter`
    pub fn count(&self, filter: &ReservationFilter) -> usize {
        self.reservations
            .read()
            .iter()
            .filter(|r| filter.matches(r))
            .count()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Reservation> {
        self.reservations.read().iter().find(|r| r.id == id).cloned()
    }

    /// Set the status. Every transition is allowed.
    pub fn update_status(&self, id: &str, status: ReservationStatus) -> AppResult<Reservation> {
        let mut reservations = self.reservations.write();
        let reservation = reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::reservation_not_found(id))?;
        let previous = reservation.status;
        reservation.status = status;

        tracing::info!(
            reservation_id = %id,
            from = %previous,
            to = %status,
            "Reservation status updated"
        );
        Ok(reservation.clone())
    }
}

fn validate(reservation: &Reservation) -> AppResult<()> {
    if reservation.check_out <= reservation.check_in {
        return Err(AppError::new(ErrorCode::InvalidStayDates)
            .with_detail("id", reservation.id.as_str()));
    }
    if reservation.guests < 1 || !reservation.total.is_finite() || reservation.total < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Reservation {} has invalid guests or total", reservation.id),
        ));
    }
    Ok(())
}
