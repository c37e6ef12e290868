//! Data models
//!
//! Serialized with camelCase field names, the same shape the admin's
//! seed data and durable storage blobs use.

pub mod reservation;
pub mod session_user;
pub mod system_settings;
pub mod tent_size;
pub mod tent_spot;
pub mod zone;

// Re-exports
pub use reservation::*;
pub use session_user::*;
pub use system_settings::*;
pub use tent_size::*;
pub use tent_spot::*;
pub use zone::*;
