//! Unified SDK error types.

use thiserror::Error;

/// Message used when the backend reports a failure without one.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "요청을 처리하지 못했습니다.";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Well-formed response whose envelope carried `success: false`.
    #[error("API error: {message}")]
    Api { message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Application-level failure with the backend message, or `default` when
    /// the backend sent none.
    pub fn api(message: Option<&str>, default: &str) -> Self {
        let message = match message {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => default.to_string(),
        };
        SdkError::Api { message }
    }

    /// Whether this is an application-level (`success: false`) failure rather
    /// than a transport or decoding failure.
    pub fn is_api(&self) -> bool {
        matches!(self, SdkError::Api { .. })
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Map a non-success status code and body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            403 => HttpError::Forbidden(body),
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_prefers_backend_message() {
        let err = SdkError::api(Some("재고가 부족합니다."), DEFAULT_API_ERROR_MESSAGE);
        assert!(err.is_api());
        assert_eq!(err.to_string(), "API error: 재고가 부족합니다.");
    }

    #[test]
    fn test_api_error_falls_back_to_default() {
        let err = SdkError::api(None, "기본 메시지");
        assert_eq!(err.to_string(), "API error: 기본 메시지");
        let err = SdkError::api(Some("  "), "기본 메시지");
        assert_eq!(err.to_string(), "API error: 기본 메시지");
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(HttpError::from_status(401, String::new()), HttpError::Unauthorized));
        assert!(matches!(HttpError::from_status(403, "no".into()), HttpError::Forbidden(_)));
        assert!(matches!(HttpError::from_status(404, "gone".into()), HttpError::NotFound(b) if b == "gone"));
        assert!(matches!(HttpError::from_status(429, String::new()), HttpError::RateLimited));
        assert!(matches!(HttpError::from_status(422, String::new()), HttpError::BadRequest(_)));
        assert!(matches!(
            HttpError::from_status(503, "down".into()),
            HttpError::ServerError { status: 503, .. }
        ));
        assert!(!SdkError::from(HttpError::Unauthorized).is_api());
    }
}
