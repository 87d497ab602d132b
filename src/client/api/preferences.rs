use serde::Serialize;

use crate::client::api::{decode, post_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::Ack;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferencesRequest {
    pub user_id: String,
    pub city: String,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

/// Records the sign-up preferences for a freshly created account. Must only
/// be called after the sign-up request succeeded; a failure here leaves the
/// account without preferences and is surfaced, not compensated.
pub async fn update_preferences(
    config: &ApiConfig,
    request: &PreferencesRequest,
) -> Result<(), ApiError> {
    let url = config.endpoint("routes/auth/update_preferences.php");
    let body = post_json(&url, request).await?;
    decode::<Ack>(&body).map(|_| ())
}
