//! Wire model of the events listing response.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of a successful `GET /calendars/{id}/events`.
///
/// Only a JSON object is accepted. A body without `items` is an empty
/// listing. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct EventsResponse {
    pub items: Vec<EventItem>,
}

/// A single event object. Only the title is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct EventItem {
    pub summary: String,
}

impl TryFrom<Map<String, Value>> for EventsResponse {
    type Error = serde_json::Error;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let items = match object.remove("items") {
            Some(items) => serde_json::from_value(items)?,
            None => Vec::new(),
        };
        Ok(Self { items })
    }
}

impl TryFrom<Map<String, Value>> for EventItem {
    type Error = serde_json::Error;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let summary = object
            .remove("summary")
            .ok_or_else(|| serde_json::Error::missing_field("summary"))?;
        Ok(Self {
            summary: serde_json::from_value(summary)?,
        })
    }
}

impl EventsResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    /// Fails on malformed JSON, a non-object body, a non-array `items`,
    /// or an item without a string `summary`.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Event titles in payload order.
    pub fn into_summaries(self) -> Vec<String> {
        self.items.into_iter().map(|item| item.summary).collect()
    }
}
