//! Failure taxonomy of an events fetch.
//!
//! A fetch either fails to complete the exchange ([`ClientError`]) or completes
//! it with an unusable result ([`InvalidData`]). Nothing in between.

use thiserror::Error;

/// The exchange with the remote service could not be completed.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport raised an error (connect, DNS, TLS, timeout, ...).
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    /// The transport neither failed nor produced a response.
    #[error("client returned no response")]
    NoResponse,
}

/// The exchange completed but its result cannot be used.
#[derive(Error, Debug)]
pub enum InvalidData {
    #[error("client completed with {0} status code")]
    Status(u16),

    #[error("invalid events payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum GCalError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    InvalidData(#[from] InvalidData),
}

impl GCalError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Client(_) => "Unable to reach the calendar. Check your connection.",
            Self::InvalidData(InvalidData::Status(status)) if *status >= 500 => {
                "The calendar service is having trouble. Please try again later."
            }
            Self::InvalidData(InvalidData::Status(_)) => "The calendar request was rejected.",
            Self::InvalidData(InvalidData::Decode(_)) => {
                "Received unexpected calendar data. Please try again."
            }
        }
    }

    /// Whether the same request could succeed if simply sent again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(ClientError::Transport(_)) => true,
            Self::Client(ClientError::NoResponse) => false,
            Self::InvalidData(InvalidData::Status(status)) => *status >= 500 || *status == 429,
            Self::InvalidData(InvalidData::Decode(_)) => false,
        }
    }

    /// Offending status code, when the failure is a non-200 reply.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidData(InvalidData::Status(status)) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_format() {
        let err = GCalError::from(InvalidData::Status(404));
        assert_eq!(err.to_string(), "client completed with 404 status code");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_transport_error_keeps_cause() {
        let err = GCalError::from(ClientError::from(anyhow::anyhow!("connection refused")));
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.status_code().is_none());
    }

    #[test]
    fn test_decode_error_wraps_parse_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let err = GCalError::from(InvalidData::from(parse_err));
        assert!(err.to_string().starts_with("invalid events payload:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_is_retryable() {
        assert!(GCalError::from(ClientError::from(anyhow::anyhow!("timeout"))).is_retryable());
        assert!(GCalError::from(InvalidData::Status(503)).is_retryable());
        assert!(GCalError::from(InvalidData::Status(429)).is_retryable());
        assert!(!GCalError::from(InvalidData::Status(404)).is_retryable());
        assert!(!GCalError::from(ClientError::NoResponse).is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert!(GCalError::from(ClientError::NoResponse)
            .user_message()
            .contains("connection"));
        assert!(GCalError::from(InvalidData::Status(500))
            .user_message()
            .contains("try again later"));
        assert!(GCalError::from(InvalidData::Status(400))
            .user_message()
            .contains("rejected"));
    }
}
