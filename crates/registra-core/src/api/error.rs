use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Every failure the client can surface, normalized into a fixed set of
/// kinds so call sites can match exhaustively instead of inspecting raw
/// transport errors or status codes.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Local input check failed; no network call was made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// No HTTP response was received (unreachable host, DNS failure,
    /// connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// HTTP 401 - session expired or invalid, caller must re-authenticate.
    #[error("Unauthorized - session expired or invalid")]
    Auth,

    /// HTTP 403 - action not permitted for this identity.
    #[error("Access denied: {0}")]
    Permission(String),

    /// HTTP 404.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP 5xx.
    #[error("Server error: {0}")]
    Server(String),

    /// Any other non-2xx status, passed through with its body.
    #[error("Unexpected status {status}: {body}")]
    UnknownApi { status: u16, body: String },

    /// The credential store's backing medium failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// The cut point backs up to a char boundary so multibyte text
    /// (accented Spanish error messages) cannot split mid-character.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// Map a non-success HTTP status and its body into an error kind.
    /// Applied uniformly to every endpoint; this is the sole place
    /// status codes are interpreted.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Auth,
            403 => ApiError::Permission(truncated),
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::Server(truncated),
            _ => ApiError::UnknownApi {
                status: status.as_u16(),
                body: truncated,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Auth
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "nope"),
            ApiError::Permission(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "missing"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, ""),
            ApiError::Server(_)
        ));
    }

    #[test]
    fn test_unmapped_status_passes_through() {
        match ApiError::from_status(StatusCode::IM_A_TEAPOT, "short and stout") {
            ApiError::UnknownApi { status, body } => {
                assert_eq!(status, 418);
                assert_eq!(body, "short and stout");
            }
            other => panic!("expected UnknownApi, got {other:?}"),
        }
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Place a multibyte character straddling the cut point.
        let body = format!("{}é y más detalle de sobra{}", "a".repeat(499), "x".repeat(100));
        match ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ApiError::Server(message) => {
                assert!(message.contains("truncated"));
                // The é (bytes 499..501) must be dropped whole.
                assert!(message.starts_with(&"a".repeat(499)));
                assert!(!message.contains('é'));
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(2000);
        match ApiError::from_status(StatusCode::IM_A_TEAPOT, &body) {
            ApiError::UnknownApi { body, .. } => {
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            other => panic!("expected UnknownApi, got {other:?}"),
        }
    }
}
