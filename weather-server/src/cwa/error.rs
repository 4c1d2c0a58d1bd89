//! CWA client error types.

/// Errors that can occur when talking to the CWA open-data API.
#[derive(Debug, thiserror::Error)]
pub enum CwaError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body didn't have the expected shape
    #[error("malformed record: {message}")]
    MalformedRecord { message: String },
}

impl From<super::convert::ConversionError> for CwaError {
    fn from(e: super::convert::ConversionError) -> Self {
        CwaError::MalformedRecord {
            message: e.to_string(),
        }
    }
}
