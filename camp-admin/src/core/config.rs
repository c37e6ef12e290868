use crate::auth::AdminCredentials;
use std::path::PathBuf;

/// Admin configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory |
/// | STORAGE_FILE | admin.redb | redb file inside WORK_DIR |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | daily rolling log directory |
/// | ADMIN_USERNAME | admin | login username |
/// | ADMIN_PASSWORD | admin123 | login password |
/// | ENVIRONMENT | development | environment name |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/camp-admin LOG_LEVEL=debug cargo run -p camp-admin
/// ```
#[derive(Clone)]
pub struct Config {
    /// Working directory holding the storage file
    pub work_dir: String,
    /// Storage file name, relative to `work_dir`
    pub storage_file: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub admin_username: String,
    pub admin_password: String,
    /// development | staging | production
    pub environment: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("work_dir", &self.work_dir)
            .field("storage_file", &self.storage_file)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .field("admin_username", &self.admin_username)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = AdminCredentials::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            storage_file: std::env::var("STORAGE_FILE").unwrap_or_else(|_| "admin.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the working directory
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the redb storage file
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.storage_file)
    }

    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
