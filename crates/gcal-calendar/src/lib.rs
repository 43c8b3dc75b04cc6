//! Google Calendar event listing.
//!
//! [`GCalService`] turns a calendar id and a date range into a request against
//! an injected [`gcal_http::HttpClient`], and the reply into event titles.

pub mod error;
pub mod iso;
pub mod service;
pub mod types;

pub use error::{ClientError, GCalError, InvalidData};
pub use iso::ToIso8601;
pub use service::{GCalService, DEFAULT_CALENDAR_ID, ORDER_BY, SEARCH_FILTER, SINGLE_EVENTS};
pub use types::{EventItem, EventsResponse};
