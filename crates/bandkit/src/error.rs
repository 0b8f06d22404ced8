//! Error types for BandKit

use thiserror::Error;

/// Errors that can occur while fetching a Bandcamp page
///
/// Extraction never produces errors of its own: a field that cannot be
/// located is simply omitted from the record. Everything here is fatal to
/// the invocation that hit it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build the HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Failed to connect to the server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        /// The status code the server returned
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Other request error
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a reqwest error into the matching variant
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout_secs)
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::Timeout(30).to_string(),
            "Request timed out after 30 seconds"
        );
        assert_eq!(
            FetchError::Status {
                status: 404,
                url: "https://x.bandcamp.com/album/y".to_string(),
            }
            .to_string(),
            "HTTP 404 from https://x.bandcamp.com/album/y"
        );
        assert_eq!(
            FetchError::Request("boom".to_string()).to_string(),
            "Request failed: boom"
        );
    }
}
