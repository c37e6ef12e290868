//! Session User Model

use serde::{Deserialize, Serialize};

/// The signed-in admin, stored as-is under the `user` storage key.
///
/// The role is carried but not checked; any session grants every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl SessionUser {
    pub const ADMIN_ROLE: &'static str = "administrator";

    pub fn administrator(username: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            username: username.into(),
            role: Self::ADMIN_ROLE.to_string(),
        }
    }
}
