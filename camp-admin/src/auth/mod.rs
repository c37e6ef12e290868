//! Authentication module
//!
//! - [`SessionGuard`] - login / logout / restore over durable storage
//! - [`AdminCredentials`] - the single fixed credential pair

pub mod session;

pub use session::{AdminCredentials, INVALID_CREDENTIALS_MESSAGE, SessionGuard, SessionState};
