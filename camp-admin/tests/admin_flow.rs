//! End-to-end admin flow over both storage backends

use camp_admin::auth::INVALID_CREDENTIALS_MESSAGE;
use camp_admin::{
    AdminState, AdminTab, AdminView, Config, Confirmation, ErrorCode, KeyValueStore, MemoryStore,
    RedbStore, SessionState,
};
use shared::models::{
    ReservationFilter, ReservationStatus, StatusFilter, SubsystemKey, SystemStatus,
    TentSpotCreate,
};
use std::sync::Arc;
use tempfile::TempDir;

fn config(dir: &TempDir) -> Config {
    Config::with_overrides(dir.path().to_string_lossy().to_string())
}

fn login(state: &mut AdminState, config: &Config) {
    let creds = config.credentials();
    assert!(
        state
            .session_mut()
            .login(&creds.username, &creds.password)
            .unwrap()
    );
}

#[test]
fn wrong_password_keeps_everything_locked() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let mut state = AdminState::with_storage(&config, Arc::new(MemoryStore::new())).unwrap();

    let ok = state
        .session_mut()
        .login(&config.admin_username, "not-the-password")
        .unwrap();
    assert!(!ok);
    assert_eq!(state.session().state(), &SessionState::Unauthenticated);
    assert_eq!(
        state.session().login_error(),
        Some(INVALID_CREDENTIALS_MESSAGE)
    );
    assert_eq!(
        state.open_tab(AdminTab::Reservations).unwrap_err().code,
        ErrorCode::NotAuthenticated
    );
}

#[test]
fn session_and_settings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    {
        let mut state = AdminState::initialize(&config).unwrap();
        assert!(!state.session().is_authenticated());
        login(&mut state, &config);

        let AdminView::Settings(settings) = state.open_tab(AdminTab::Settings).unwrap() else {
            panic!("expected settings view");
        };
        settings.set_status(SubsystemKey::PaymentSystem, SystemStatus::Inactive);
        assert!(settings.has_unsaved_changes());
        settings.save().unwrap();
        assert!(!settings.has_unsaved_changes());
    }

    let state = AdminState::initialize(&config).unwrap();
    let user = state.session().current_user().expect("session restored");
    assert_eq!(user.username, config.admin_username);

    let AdminView::Settings(settings) = state.open_tab(AdminTab::Settings).unwrap() else {
        panic!("expected settings view");
    };
    let saved = settings.get();
    assert_eq!(saved.get(SubsystemKey::PaymentSystem), SystemStatus::Inactive);
    assert_eq!(saved.get(SubsystemKey::ZonesManagement), SystemStatus::Active);
    assert_eq!(saved.entries().count(), 5);
}

#[test]
fn unreadable_settings_do_not_block_startup() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage
        .put_raw("systemSettings", br#"{"paymentSystem":"paused"}"#)
        .unwrap();

    let mut state = AdminState::with_storage(&config, storage).unwrap();
    login(&mut state, &config);
    let AdminView::Settings(settings) = state.open_tab(AdminTab::Settings).unwrap() else {
        panic!("expected settings view");
    };
    assert_eq!(
        settings.status(SubsystemKey::PaymentSystem),
        SystemStatus::Maintenance
    );
}

#[test]
fn failed_login_while_signed_in_survives_reload() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let mut state = AdminState::with_storage(&config, storage.clone()).unwrap();
    login(&mut state, &config);
    assert!(
        !state
            .session_mut()
            .login(&config.admin_username, "not-the-password")
            .unwrap()
    );
    assert!(state.session().is_authenticated());

    let reloaded = AdminState::with_storage(&config, storage).unwrap();
    assert_eq!(
        reloaded.session().is_authenticated(),
        state.session().is_authenticated()
    );
}

#[test]
fn logout_clears_stored_session() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let storage: Arc<dyn KeyValueStore> = Arc::new(RedbStore::open_in_memory().unwrap());

    let mut state = AdminState::with_storage(&config, storage.clone()).unwrap();
    login(&mut state, &config);
    state.session_mut().logout().unwrap();
    assert!(state.open_tab(AdminTab::Zones).is_err());

    let fresh = AdminState::with_storage(&config, storage).unwrap();
    assert!(!fresh.session().is_authenticated());
}

#[test]
fn reservation_search_and_status_change() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let mut state = AdminState::with_storage(&config, Arc::new(MemoryStore::new())).unwrap();
    login(&mut state, &config);

    let AdminView::Reservations(reservations) = state.open_tab(AdminTab::Reservations).unwrap()
    else {
        panic!("expected reservations view");
    };

    let riverside = ReservationFilter::new("riverside", StatusFilter::All);
    let ids: Vec<_> = reservations
        .list(&riverside)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["R001", "R004"]);

    let pending = ReservationFilter::new("", StatusFilter::Only(ReservationStatus::Pending));
    assert_eq!(reservations.count(&pending), 1);

    let updated = reservations
        .update_status("R002", ReservationStatus::Confirmed)
        .unwrap();
    assert_eq!(updated.status, ReservationStatus::Confirmed);
    assert_eq!(updated.nights(), 2);
    assert_eq!(reservations.count(&pending), 0);

    let (zone_id, spot) = state.reservation_spot("R001").unwrap().expect("spot a1");
    assert_eq!(zone_id, "1");
    assert_eq!(spot.name, "A1");
    assert!(state.reservation_spot("R003").unwrap().is_none());
    assert_eq!(
        state.reservation_spot("R999").unwrap_err().code,
        ErrorCode::ReservationNotFound
    );
}

#[test]
fn zone_and_spot_editing() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let mut state = AdminState::with_storage(&config, Arc::new(MemoryStore::new())).unwrap();
    login(&mut state, &config);

    let AdminView::Zones { zones, spots } = state.open_tab(AdminTab::Zones).unwrap() else {
        panic!("expected zones view");
    };

    let resized = spots.change_size("1", "spot_a1", "large").unwrap();
    assert_eq!(resized.size.id, "large");
    assert_eq!(resized.capacity, 5);
    assert_eq!(resized.price_per_night, 700.0);

    let created = spots
        .create(
            "2",
            TentSpotCreate {
                name: "B7".to_string(),
                size_id: Some("small".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(spots.list("2").unwrap().len(), 2);

    assert!(
        !spots
            .delete("2", &created.id, Confirmation::Declined)
            .unwrap()
    );
    assert!(
        spots
            .delete("2", &created.id, Confirmation::Confirmed)
            .unwrap()
    );
    assert_eq!(spots.list("2").unwrap().len(), 1);

    assert!(zones.delete("3", Confirmation::Confirmed));
    assert_eq!(zones.len(), 2);
    assert_eq!(
        spots.list("3").unwrap_err().code,
        ErrorCode::ZoneNotFound
    );
}
