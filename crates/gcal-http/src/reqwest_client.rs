//! Production [`HttpClient`] backed by reqwest.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use gcal_core::HttpConfig;
use tracing::instrument;

use crate::client::HttpClient;
use crate::query::QueryParams;
use crate::response::HttpResponse;

pub struct ReqwestHttpClient {
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl ReqwestHttpClient {
    /// # Errors
    /// Fails on a zero timeout, which would time out every request.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            anyhow::bail!("HTTP timeout must be greater than 0 seconds");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            bearer_token: config.bearer_token.clone(),
        })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            bearer_token: None,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    #[instrument(skip(self, query_params), level = "debug")]
    async fn get(&self, url: &str, query_params: &QueryParams) -> Result<Option<HttpResponse>> {
        let mut request = self.client.get(url).query(&query_params.to_pairs());
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Request failed"))
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        tracing::debug!(status, bytes = body.len(), "Response received");
        Ok(Some(HttpResponse::new(status, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_params() -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("orderBy", "startTime")
            .push("q", "💸")
            .push("singleEvents", true);
        params
    }

    #[tokio::test]
    async fn test_encodes_query_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(query_param("orderBy", "startTime"))
            .and(query_param("q", "💸"))
            .and(query_param("singleEvents", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items": []}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ReqwestHttpClient::new(&HttpConfig::default()).unwrap();
        let url = format!("{}/calendars/primary/events", mock_server.uri());
        let response = client.get(&url, &sample_params()).await.unwrap().unwrap();

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.body(), r#"{"items": []}"#);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = HttpConfig {
            timeout_secs: 0,
            ..HttpConfig::default()
        };

        let err = ReqwestHttpClient::new(&config).err().unwrap();

        assert!(err.to_string().contains("greater than 0"));
    }

    #[tokio::test]
    async fn test_passes_through_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&mock_server)
            .await;

        let client = ReqwestHttpClient::new(&HttpConfig::default()).unwrap();
        let response = client
            .get(&mock_server.uri(), &QueryParams::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.status_code(), 503);
        assert_eq!(response.body(), "unavailable");
    }

    #[tokio::test]
    async fn test_sends_bearer_token_and_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("Authorization", "Bearer test_token"))
            .and(header("User-Agent", "gcal-test"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = HttpConfig {
            user_agent: "gcal-test".to_string(),
            bearer_token: Some("test_token".to_string()),
            ..HttpConfig::default()
        };
        let client = ReqwestHttpClient::new(&config).unwrap();
        let response = client
            .get(&mock_server.uri(), &QueryParams::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.status_code(), 200);
    }

    #[tokio::test]
    async fn test_connection_failure_is_error() {
        // Nothing listens on the discard port.
        let client = ReqwestHttpClient::with_client(reqwest::Client::new());
        let result = client.get("http://127.0.0.1:9", &QueryParams::new()).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("GET http://127.0.0.1:9 failed"));
    }
}
