use serde::Serialize;

use crate::client::api::{decode, get_text, post_empty, post_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::{Ack, SignInResponse, SignUpResponse, UserResponse};
use crate::model::user::UserProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignUpForm {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn sign_in(config: &ApiConfig, form: &SignInForm) -> Result<UserProfile, ApiError> {
    let url = config.endpoint("routes/auth/signin.php");
    let body = post_json(&url, form).await?;
    decode::<SignInResponse>(&body)?
        .into_profile()
        .ok_or(ApiError::Malformed)
}

/// Creates the account. The returned identifier and token feed the follow-up
/// preferences request and the auth cookie.
pub async fn sign_up(config: &ApiConfig, form: &SignUpForm) -> Result<SignUpResponse, ApiError> {
    let url = config.endpoint("routes/auth/signup.php");
    let body = post_json(&url, form).await?;
    decode::<SignUpResponse>(&body)
}

pub async fn get_user(config: &ApiConfig, username: &str) -> Result<UserProfile, ApiError> {
    let url = format!(
        "{}?username={username}",
        config.endpoint("routes/auth/get_user.php")
    );
    let body = get_text(&url).await?;
    decode::<UserResponse>(&body)?.user.ok_or(ApiError::Malformed)
}

pub async fn logout(config: &ApiConfig) -> Result<(), ApiError> {
    let url = config.endpoint("routes/auth/logout.php");
    let body = post_empty(&url).await?;
    decode::<Ack>(&body).map(|_| ())
}
