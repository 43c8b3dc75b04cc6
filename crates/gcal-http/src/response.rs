//! Raw transport response, before any interpretation.

/// Status code and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status_code: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Raw serialized payload.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Only `200 OK` counts; other 2xx codes do not.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}
