use serde_json::Number;
use thiserror::Error;

/// Fallback shown when the service rejects a request without saying why
pub const GENERIC_SERVICE_ERROR: &str = "An error occurred.";

/// Fallback shown when a 429 body carries no reason
pub const GENERIC_RATE_LIMIT_REASON: &str = "Too many requests";

/// Why a summary request did not produce a summary.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No video ID could be extracted; nothing was sent
    #[error("Invalid YouTube URL.")]
    InvalidUrl,

    /// The service asked us to back off; the wait is kept exactly as the body sent it
    #[error("{reason} ({retry_after_seconds} sec)")]
    RateLimited { retry_after_seconds: Number, reason: String },

    /// The service answered with a non-2xx status
    #[error("{message}")]
    ServiceError { status: u16, message: String },

    /// No response was obtained at all
    #[error("Failed to fetch summary.")]
    NetworkFailure { reason: String },

    /// A response arrived but its body could not be understood
    #[error("Unexpected response from summary service (HTTP {status}).")]
    MalformedResponse { status: u16, reason: String },
}

impl RequestError {
    /// Whether resubmitting the same URL later could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, RequestError::RateLimited { .. } | RequestError::NetworkFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        assert_eq!(RequestError::InvalidUrl.to_string(), "Invalid YouTube URL.");
    }

    #[test]
    fn test_rate_limited_message() {
        let err = RequestError::RateLimited {
            retry_after_seconds: Number::from(30),
            reason: "Too many requests".to_string(),
        };
        assert_eq!(err.to_string(), "Too many requests (30 sec)");
    }

    #[test]
    fn test_service_error_message_verbatim() {
        let err = RequestError::ServiceError {
            status: 500,
            message: "Transcript unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Transcript unavailable");
    }

    #[test]
    fn test_network_failure_hides_reason() {
        let err = RequestError::NetworkFailure {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch summary.");
    }

    #[test]
    fn test_rate_limited_fractional_message() {
        let err = RequestError::RateLimited {
            retry_after_seconds: Number::from_f64(2.5).unwrap(),
            reason: "Slow down".to_string(),
        };
        assert_eq!(err.to_string(), "Slow down (2.5 sec)");
    }

    #[test]
    fn test_is_retryable() {
        assert!(!RequestError::InvalidUrl.is_retryable());
        assert!(
            RequestError::NetworkFailure {
                reason: String::new()
            }
            .is_retryable()
        );
        assert!(
            !RequestError::ServiceError {
                status: 404,
                message: GENERIC_SERVICE_ERROR.to_string()
            }
            .is_retryable()
        );
    }
}
