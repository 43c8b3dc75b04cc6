//! The transport capability consumed by the calendar fetcher.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::query::QueryParams;
use crate::response::HttpResponse;

/// Minimal GET-only HTTP client.
///
/// Implementations encode `query_params` onto the URL and perform the request.
/// The three outcomes are distinct:
/// - `Err(_)`: the exchange could not be performed (connect, DNS, TLS, timeout).
/// - `Ok(None)`: no error was raised but no response was produced either.
/// - `Ok(Some(_))`: the server answered, with any status code.
///
/// Status codes are never interpreted here.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, query_params: &QueryParams) -> Result<Option<HttpResponse>>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn get(&self, url: &str, query_params: &QueryParams) -> Result<Option<HttpResponse>> {
        (**self).get(url, query_params).await
    }
}
