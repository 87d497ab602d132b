use serde::{Deserialize, Serialize};

/// The signed-in user's profile as cached in localStorage.
///
/// This is a client copy: the API owns the record, and the blob is treated as
/// the source of truth until explicitly refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_uuid: Option<String>,
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }

    pub fn display_name(&self) -> &str {
        match self.fullname.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "No Name Provided",
        }
    }
}

/// A user row in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub role: String,
}
