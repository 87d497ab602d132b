use crate::client::api::{decode, get_text, post_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::api::{Ack, EventsResponse};
use crate::model::event::Event;

/// Events the given user has booked. A booking exists only as membership in
/// this list; there is no client-held booking entity.
pub async fn get_booked_events(
    config: &ApiConfig,
    username: &str,
) -> Result<Vec<Event>, ApiError> {
    let url = format!(
        "{}?username={username}",
        config.endpoint("routes/events/get_booked_events.php")
    );
    let body = get_text(&url).await?;
    Ok(decode::<EventsResponse>(&body)?.events)
}

pub async fn book_ticket(config: &ApiConfig, event_id: i64) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct BookTicket {
        event_id: String,
    }

    let url = config.endpoint("routes/events/book_ticket.php");
    let body = post_json(
        &url,
        &BookTicket {
            event_id: event_id.to_string(),
        },
    )
    .await?;
    decode::<Ack>(&body).map(|_| ())
}
