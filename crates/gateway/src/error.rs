use thiserror::Error;

/// Why a gateway call produced no usable payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalError {
    /// Connection failure, DNS failure, or timeout.
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("Unexpected status: {0}")]
    BadStatus(u16),
    /// The body is not JSON or lacks a required key.
    #[error("Malformed body: {0}")]
    MalformedBody(String),
}

/// Discriminant of [`ExternalError`], for replies and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalErrorKind {
    Network,
    BadStatus,
    MalformedBody,
}

impl ExternalError {
    pub fn kind(&self) -> ExternalErrorKind {
        match self {
            ExternalError::Network(_) => ExternalErrorKind::Network,
            ExternalError::BadStatus(_) => ExternalErrorKind::BadStatus,
            ExternalError::MalformedBody(_) => ExternalErrorKind::MalformedBody,
        }
    }
}
