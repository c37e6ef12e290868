//! Camp Admin - 营地预订后台核心
//!
//! # 架构概述
//!
//! 本 crate 是营地预订系统的后台管理核心，提供以下功能：
//!
//! - **存储** (`storage`): redb 键值存储，可注入内存实现
//! - **认证** (`auth`): 单管理员会话守卫
//! - **数据仓库** (`stores`): 营地区域、帐篷位、预订、系统设置
//! - **状态** (`core`): 配置与标签页访问控制
//!
//! # 模块结构
//!
//! ```text
//! camp-admin/src/
//! ├── core/          # 配置、状态
//! ├── auth/          # 会话守卫
//! ├── storage/       # 键值存储 (redb / memory)
//! ├── stores/        # 区域、帐篷位、预订、设置
//! ├── seed.rs        # 初始数据
//! └── utils/         # 日志、校验
//! ```

pub mod auth;
pub mod core;
pub mod seed;
pub mod storage;
pub mod stores;
pub mod utils;

// Re-export 公共类型
pub use auth::{SessionGuard, SessionState};
pub use core::{AdminState, AdminTab, AdminView, Config};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use stores::{
    Confirmation, ReservationRepository, SettingsStore, TentSpotRepository, ZoneRepository,
};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration, prepare the work dir and start logging
pub fn setup_environment() -> AppResult<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir).map_err(|e| {
        AppError::config(format!("Cannot create work dir {}: {e}", config.work_dir))
    })?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::config(format!("Cannot create log dir {dir}: {e}")))?;
    }

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}
