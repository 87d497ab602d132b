//! Tests for response envelope decoding.

use crate::client::api::{decode, ApiError};
use crate::model::api::{Ack, EventsResponse, SignUpResponse};

/// Decodes a successful envelope into its payload.
#[test]
fn decodes_successful_events_response() {
    let body = r#"{"success":true,"events":[{"event_id":1,"title":"Jazz Night","price":"10"}]}"#;
    let response = decode::<EventsResponse>(body).unwrap();
    assert_eq!(response.events.len(), 1);
    assert_eq!(response.events[0].title, "Jazz Night");
}

/// A missing payload field defaults to empty rather than failing.
#[test]
fn missing_events_field_defaults_to_empty() {
    let response = decode::<EventsResponse>(r#"{"success":true}"#).unwrap();
    assert!(response.events.is_empty());
}

/// `success: false` becomes an error carrying the server message verbatim.
#[test]
fn business_failure_carries_server_message() {
    let body = r#"{"success":false,"message":"Event is sold out"}"#;
    let err = decode::<Ack>(body).unwrap_err();
    assert_eq!(err, ApiError::Api("Event is sold out".to_string()));
}

/// `success: false` with no message falls back to a generic one.
#[test]
fn business_failure_without_message_uses_generic() {
    let err = decode::<Ack>(r#"{"success":false}"#).unwrap_err();
    assert_eq!(err, ApiError::Api("Request failed".to_string()));
}

/// Unparseable bodies surface as the malformed-response error.
#[test]
fn garbage_body_is_malformed() {
    let err = decode::<Ack>("<html>502 Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Malformed);
}

/// Sign-up responses expose the new identifier and token.
#[test]
fn decodes_sign_up_payload() {
    let body = r#"{"success":true,"user_id":"ABC-123","token":"tok"}"#;
    let response = decode::<SignUpResponse>(body).unwrap();
    assert_eq!(response.user_id.as_deref(), Some("ABC-123"));
    assert_eq!(response.token.as_deref(), Some("tok"));
}
