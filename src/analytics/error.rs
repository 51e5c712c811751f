//! Error handling for the analytics module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The response body did not match the analytics payload shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Decode(_) => FailureKind::Decode,
            FetchError::Reqwest(e) if e.is_decode() => FailureKind::Decode,
            FetchError::Reqwest(_) => FailureKind::Network,
            FetchError::Http { .. } => FailureKind::Status,
        }
    }
}

/// Cause of a failed poll, kept for diagnostics only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum FailureKind {
    Network,
    Status,
    Decode,
}

/// A failed poll as seen past the poll boundary.
///
/// Unlike [`FetchError`] this is cloneable, so it can travel inside events.
/// The dashboard never shows `detail`; it only reaches the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl From<&FetchError> for FetchFailure {
    fn from(error: &FetchError) -> Self {
        FetchFailure::new(error.kind(), error.to_string())
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failure: {}", self.kind, self.detail)
    }
}
