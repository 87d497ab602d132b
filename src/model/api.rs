//! Response envelopes for the external API.
//!
//! Every endpoint answers with a `success` flag and, on failure, a `message`
//! string; the payload field varies per endpoint. Each response type exposes
//! the envelope through [`ResponseEnvelope`] so the client layer can map
//! `success: false` to an error carrying the server's message verbatim.

use serde::{Deserialize, Serialize};

use crate::model::event::Event;
use crate::model::user::{AdminUser, UserProfile};

/// Common view over the `success`/`message` envelope.
pub trait ResponseEnvelope {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(impl ResponseEnvelope for $ty {
            fn success(&self) -> bool {
                self.success
            }

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        })+
    };
}

/// Bare acknowledgement with no payload (bookings, deletes, role changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub event: Option<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Sign-in returns the profile fields inline rather than nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_uuid: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl SignInResponse {
    /// Assembles the client profile copy from the inline fields.
    pub fn into_profile(self) -> Option<UserProfile> {
        Some(UserProfile {
            user_uuid: self.user_uuid,
            username: self.username?,
            fullname: self.fullname,
            email: self.email.unwrap_or_default(),
            role: self.role,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// The session-check endpoint answers outside the usual envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "loggedIn", default)]
    pub logged_in: bool,
}

impl_envelope!(
    Ack,
    EventsResponse,
    EventResponse,
    UsersResponse,
    UserResponse,
    SignInResponse,
    SignUpResponse,
);
