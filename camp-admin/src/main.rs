use camp_admin::{AdminState, AdminTab, AdminView, setup_environment};
use shared::models::{ReservationFilter, ReservationStatus, StatusFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment()?;
    tracing::info!(environment = %config.environment, "Camp admin starting...");

    // 2. 初始化状态 (存储、种子数据、会话恢复)
    let state = AdminState::initialize(&config)?;

    let Some(user) = state.session().current_user() else {
        tracing::info!("No stored session, sign in required");
        return Ok(());
    };
    tracing::info!(username = %user.username, role = %user.role, "Session restored");

    // 3. 概要
    if let AdminView::Zones { zones, spots } = state.open_tab(AdminTab::Zones)? {
        for zone in zones.list() {
            tracing::info!(
                zone = %zone.name,
                active = zone.is_active,
                spots = spots.list(&zone.id)?.len(),
                "Zone"
            );
        }
    }

    if let AdminView::Reservations(reservations) = state.open_tab(AdminTab::Reservations)? {
        for status in ReservationStatus::ALL {
            let filter = ReservationFilter::new("", StatusFilter::Only(status));
            tracing::info!(status = status.label(), count = reservations.count(&filter), "Reservations");
        }
    }

    if let AdminView::Settings(settings) = state.open_tab(AdminTab::Settings)? {
        for (key, status) in settings.get().entries() {
            tracing::info!(subsystem = key.label(), status = status.label(), "Setting");
        }
    }

    Ok(())
}
