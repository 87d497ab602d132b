use crate::client::api::{decode, get_text, post_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::{Ack, EventResponse, EventsResponse};
use crate::model::event::Event;

/// Optional query filters understood by the events listing endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub title: Option<String>,
    pub latest: bool,
}

impl EventFilter {
    pub fn category(slug: &str) -> Self {
        Self {
            category: Some(slug.to_string()),
            ..Self::default()
        }
    }

    pub fn title(query: &str) -> Self {
        Self {
            title: Some(query.to_string()),
            ..Self::default()
        }
    }

    pub fn latest() -> Self {
        Self {
            latest: true,
            ..Self::default()
        }
    }

    fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(format!("category={}", urlencode(category)));
        }
        if let Some(title) = &self.title {
            params.push(format!("title={}", urlencode(title)));
        }
        if self.latest {
            params.push("latest=true".to_string());
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Minimal percent-encoding for query values; enough for titles and slugs.
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push_str("%20"),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

pub async fn get_events(config: &ApiConfig, filter: &EventFilter) -> Result<Vec<Event>, ApiError> {
    let url = format!(
        "{}{}",
        config.endpoint("routes/events/get_events.php"),
        filter.query_string()
    );
    let body = get_text(&url).await?;
    Ok(decode::<EventsResponse>(&body)?.events)
}

pub async fn get_event(config: &ApiConfig, id: i64) -> Result<Event, ApiError> {
    let url = format!("{}?id={id}", config.endpoint("routes/events/get_events.php"));
    let body = get_text(&url).await?;
    decode::<EventResponse>(&body)?.event.ok_or(ApiError::Malformed)
}

/// Preference-driven picks for the signed-in user. The server may echo
/// events the user already booked; callers filter those out.
pub async fn recommend_events(
    config: &ApiConfig,
    user_uuid: &str,
) -> Result<Vec<Event>, ApiError> {
    let url = format!(
        "{}?user_uuid={user_uuid}",
        config.endpoint("routes/events/recommend_events.php")
    );
    let body = get_text(&url).await?;
    Ok(decode::<EventsResponse>(&body)?.events)
}

pub async fn add_event(config: &ApiConfig, form: web_sys::FormData) -> Result<(), ApiError> {
    let url = config.endpoint("routes/events/add_event.php");
    let body = super::post_form(&url, form).await?;
    decode::<Ack>(&body).map(|_| ())
}

pub async fn update_event(config: &ApiConfig, form: web_sys::FormData) -> Result<(), ApiError> {
    let url = config.endpoint("routes/events/update_event.php");
    let body = super::post_form(&url, form).await?;
    decode::<Ack>(&body).map(|_| ())
}

pub async fn delete_event(config: &ApiConfig, event_id: i64) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct DeleteEvent {
        event_id: i64,
    }

    let url = config.endpoint("routes/events/delete_event.php");
    let body = post_json(&url, &DeleteEvent { event_id }).await?;
    decode::<Ack>(&body).map(|_| ())
}
