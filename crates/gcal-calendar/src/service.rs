//! Events listing against a calendar API.

use gcal_core::CalendarConfig;
use gcal_http::{HttpClient, QueryParams};
use tracing::instrument;

use crate::error::{ClientError, GCalError, InvalidData};
use crate::iso::ToIso8601;
use crate::types::EventsResponse;

pub const ORDER_BY: &str = "startTime";
/// Only events whose text contains this token are listed.
pub const SEARCH_FILTER: &str = "💸";
pub const SINGLE_EVENTS: bool = true;
/// Calendar used by [`GCalService::get_default_events`] unless configured.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

pub struct GCalService<C> {
    base_url: String,
    default_calendar_id: String,
    client: C,
}

impl<C: HttpClient> GCalService<C> {
    /// Construction performs no request.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            default_calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            client,
        }
    }

    /// Takes both the base URL and the default calendar id from `config`.
    pub fn from_config(config: &CalendarConfig, client: C) -> Self {
        Self::new(config.base_url.clone(), client)
            .with_default_calendar_id(config.calendar_id.clone())
    }

    pub fn with_default_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.default_calendar_id = calendar_id.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_calendar_id(&self) -> &str {
        &self.default_calendar_id
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// `{base_url}/calendars/{calendar_id}/events`. The id is not escaped.
    pub fn events_url(&self, calendar_id: &str) -> String {
        format!("{}/calendars/{}/events", self.base_url, calendar_id)
    }

    /// Query sent with every listing request.
    pub fn events_query(from_date: &impl ToIso8601, until_date: &impl ToIso8601) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("orderBy", ORDER_BY)
            .push("q", SEARCH_FILTER)
            .push("singleEvents", SINGLE_EVENTS)
            .push("timeMax", until_date.to_iso8601())
            .push("timeMin", from_date.to_iso8601());
        params
    }

    /// Titles of the matching events in `[from_date, until_date]`, in the order
    /// the service returned them.
    ///
    /// # Errors
    /// - [`GCalError::Client`] if the transport fails or produces no response.
    /// - [`GCalError::InvalidData`] on any status other than 200, or a 200 body
    ///   that is not an events listing.
    #[instrument(skip(self, from_date, until_date), level = "info")]
    pub async fn get_events(
        &self,
        calendar_id: &str,
        from_date: impl ToIso8601,
        until_date: impl ToIso8601,
    ) -> Result<Vec<String>, GCalError> {
        let url = self.events_url(calendar_id);
        let query_params = Self::events_query(&from_date, &until_date);

        let response = match self.client.get(&url, &query_params).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                tracing::warn!("Client returned no response");
                return Err(ClientError::NoResponse.into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Client failed");
                return Err(ClientError::Transport(e).into());
            }
        };

        if !response.is_ok() {
            tracing::warn!(status = response.status_code(), "Unexpected status");
            return Err(InvalidData::Status(response.status_code()).into());
        }

        let events = EventsResponse::parse(response.body()).map_err(|e| {
            tracing::warn!(error = %e, "Invalid events payload");
            InvalidData::Decode(e)
        })?;

        let summaries = events.into_summaries();
        tracing::debug!(count = summaries.len(), "Fetched events");
        Ok(summaries)
    }

    /// [`get_events`](Self::get_events) on the default calendar.
    ///
    /// # Errors
    /// Same as [`get_events`](Self::get_events).
    pub async fn get_default_events(
        &self,
        from_date: impl ToIso8601,
        until_date: impl ToIso8601,
    ) -> Result<Vec<String>, GCalError> {
        self.get_events(&self.default_calendar_id, from_date, until_date)
            .await
    }
}
