use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// An event as served by the external API.
///
/// The API emits `price` as either a decimal string or a bare number depending
/// on the endpoint, so it is kept as a string and parsed where a numeric value
/// is needed. `date_time` is likewise kept raw; see [`parse_event_date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub event_photo: Option<String>,
}

impl Event {
    /// Whole-unit price for display ("From 120 SAR"). Unparseable prices
    /// render as zero rather than failing the view.
    pub fn price_floor(&self) -> i64 {
        self.price.trim().parse::<f64>().map(|p| p.floor() as i64).unwrap_or(0)
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        parse_event_date(&self.date_time)
    }

    /// Short date for cards and carousels, falling back to the raw value.
    pub fn date_label(&self) -> String {
        match self.date() {
            Some(date) => date.format("%-d %b %Y").to_string(),
            None => self.date_time.clone(),
        }
    }

    /// Full date and time for tables and booked-event cards.
    pub fn date_time_label(&self) -> String {
        match self.date() {
            Some(date) => date.format("%-d %b %Y, %H:%M").to_string(),
            None => self.date_time.clone(),
        }
    }
}

/// Parses the timestamp formats the backend is known to emit.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    const FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}
