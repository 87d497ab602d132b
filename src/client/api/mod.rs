//! HTTP client layer for the external API.
//!
//! Every helper returns `Result<_, ApiError>`; components map the error onto
//! a degraded view or a toast and never retry. Requests always carry
//! credentials so the API's session cookie travels with them.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod events;
pub mod preferences;

#[cfg(test)]
mod tests;

use reqwasm::http::{Request, RequestCredentials};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::model::api::ResponseEnvelope;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network or transport failure; never retried.
    #[error("failed to reach the server: {0}")]
    Transport(String),
    /// The API reported `success: false`; the message is shown verbatim.
    #[error("{0}")]
    Api(String),
    /// The body was not the JSON shape the contract promises.
    #[error("unexpected response from the server")]
    Malformed,
}

impl From<reqwasm::Error> for ApiError {
    fn from(err: reqwasm::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Decodes a response body against the `success`/`message` envelope.
pub(crate) fn decode<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + ResponseEnvelope,
{
    let parsed: T = serde_json::from_str(body).map_err(|_| ApiError::Malformed)?;
    if parsed.success() {
        Ok(parsed)
    } else {
        Err(ApiError::Api(
            parsed.message().unwrap_or("Request failed").to_string(),
        ))
    }
}

pub(crate) async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    Ok(response.text().await?)
}

pub(crate) async fn post_empty(url: &str) -> Result<String, ApiError> {
    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    Ok(response.text().await?)
}

pub(crate) async fn post_json(url: &str, body: &impl Serialize) -> Result<String, ApiError> {
    let payload = serde_json::to_string(body).map_err(|_| ApiError::Malformed)?;
    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await?;
    Ok(response.text().await?)
}

/// Multipart POST used by the photo-carrying event endpoints. The browser
/// sets the content type and boundary itself.
pub(crate) async fn post_form(url: &str, form: web_sys::FormData) -> Result<String, ApiError> {
    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .body(JsValue::from(form))
        .send()
        .await?;
    Ok(response.text().await?)
}
