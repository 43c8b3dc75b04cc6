//! In-memory [`HttpClient`] that records requests and replays a stubbed outcome.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::HttpClient;
use crate::query::{QueryParams, QueryValue};
use crate::response::HttpResponse;

#[derive(Debug, Clone, Default)]
enum Stub {
    /// Answer with no response and no error.
    #[default]
    Nothing,
    Response(HttpResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct SpyState {
    requested_urls: Vec<String>,
    last_query_params: Option<QueryParams>,
    stub: Stub,
}

/// Recording test double for [`HttpClient`].
///
/// Until a stub is set every call yields `Ok(None)`.
#[derive(Debug, Default)]
pub struct HttpClientSpy {
    state: Mutex<SpyState>,
}

impl HttpClientSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer subsequent requests with this status and body.
    pub fn mock_response(&self, status_code: u16, body: impl Into<String>) {
        self.state.lock().stub = Stub::Response(HttpResponse::new(status_code, body));
    }

    /// Fail subsequent requests with this message.
    pub fn mock_failure(&self, message: impl Into<String>) {
        self.state.lock().stub = Stub::Failure(message.into());
    }

    /// Go back to answering with no response.
    pub fn mock_nothing(&self) {
        self.state.lock().stub = Stub::Nothing;
    }

    /// Every URL requested so far, oldest first.
    pub fn requested_urls(&self) -> Vec<String> {
        self.state.lock().requested_urls.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().requested_urls.len()
    }

    /// Query parameters of the most recent request.
    pub fn last_query_params(&self) -> Option<QueryParams> {
        self.state.lock().last_query_params.clone()
    }

    /// Value of `key` in the most recent request, if any.
    pub fn requested_query_parameter(&self, key: &str) -> Option<QueryValue> {
        self.state
            .lock()
            .last_query_params
            .as_ref()
            .and_then(|params| params.get(key).cloned())
    }
}

#[async_trait]
impl HttpClient for HttpClientSpy {
    async fn get(&self, url: &str, query_params: &QueryParams) -> Result<Option<HttpResponse>> {
        let mut state = self.state.lock();
        state.requested_urls.push(url.to_string());
        state.last_query_params = Some(query_params.clone());

        match &state.stub {
            Stub::Nothing => Ok(None),
            Stub::Response(response) => Ok(Some(response.clone())),
            Stub::Failure(message) => Err(anyhow!("{message}")),
        }
    }
}
