//! HTTP transport boundary for the calendar fetcher.
//!
//! The fetcher only ever talks to [`HttpClient`]. Production code wires in
//! [`ReqwestHttpClient`]; tests wire in [`HttpClientSpy`].

pub mod client;
pub mod query;
pub mod reqwest_client;
pub mod response;
pub mod spy;

pub use client::HttpClient;
pub use query::{QueryParams, QueryValue};
pub use reqwest_client::ReqwestHttpClient;
pub use response::HttpResponse;
pub use spy::HttpClientSpy;
