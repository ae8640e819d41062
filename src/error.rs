//! Library error types.

use thiserror::Error;

/// Errors raised when mutating a [`Uri`](crate::Uri) or building one from a
/// raw URL string.
#[derive(Debug, Error)]
pub enum Error {
    /// Port outside the valid range; the previously stored port is kept.
    #[error("port {0} out of range (must be between 1 and 65535)")]
    PortOutOfRange(u32),

    /// The raw URL string could not be parsed.
    #[error("unable to parse URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
