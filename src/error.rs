// Error types for the Pulse client.
// Covers transport failures, HTTP status mapping, and media upload errors.

use thiserror::Error;

/// Errors surfaced by the transport client and typed endpoints.
///
/// The taxonomy is closed: every failure a manager can observe maps to
/// exactly one of these variants.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unexpected HTTP status: {0}")]
    InvalidResponse(u16),

    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[source] reqwest::Error),

    #[error("authentication failed: invalid or expired credentials")]
    Unauthorized,

    #[error("access forbidden")]
    Forbidden,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("server error: HTTP {0}")]
    ServerError(u16),
}

/// Errors surfaced by the media upload path.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("invalid image data")]
    InvalidImageData,

    #[error("upload failed: {0}")]
    UploadFailed(#[source] ApiError),

    #[error("failed to decode upload response: {0}")]
    Decoding(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
