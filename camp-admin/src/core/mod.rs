//! Core: configuration and admin state

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{AdminState, AdminTab, AdminView};
