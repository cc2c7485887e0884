//! Error types for API operations

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Message carried by [`ApiError::Unknown`] for statuses outside the known table.
pub const UNKNOWN_ERROR_REASON: &str = "unknown error reason";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Empty response body (status {0})")]
    EmptyResponse(u16),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Missing API key")]
    MissingApiKey,

    #[error("API key is not a valid header value")]
    InvalidApiKey,

    #[error("bad request")]
    BadRequest,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unsupported media type")]
    UnsupportedMediaType,

    #[error("rate limited")]
    RateLimited {
        /// Duration from the HTTP Retry-After header, if present
        retry_after: Option<Duration>,
    },

    #[error("internal server error")]
    InternalServerError,

    #[error("bad gateway")]
    BadGateway,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("gateway timeout")]
    GatewayTimeout,

    #[error("{message} (status {status})")]
    Unknown { status: u16, message: String },
}

impl ApiError {
    /// Map a non-success HTTP status to its error.
    ///
    /// `retry_after` is only kept for `429 Too Many Requests`.
    pub fn from_status(status: StatusCode, retry_after: Option<Duration>) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Self::UnsupportedMediaType,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited { retry_after },
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            StatusCode::BAD_GATEWAY => Self::BadGateway,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            StatusCode::GATEWAY_TIMEOUT => Self::GatewayTimeout,
            other => Self::Unknown {
                status: other.as_u16(),
                message: UNKNOWN_ERROR_REASON.to_string(),
            },
        }
    }

    /// HTTP status this error was derived from, if any.
    pub fn status_code(&self) -> Option<u16> {
        let status = match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unknown { status, .. } => return Some(*status),
            Self::Http(e) => return e.status().map(|s| s.as_u16()),
            _ => return None,
        };
        Some(status.as_u16())
    }

    /// Check if error is retryable
    pub fn should_retry(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::ServiceUnavailable)
    }

    /// Get the Retry-After hint duration, if this is a rate-limited error with one.
    pub fn retry_after_hint(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
