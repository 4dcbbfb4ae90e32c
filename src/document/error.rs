use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Success statuses other than 200 (e.g. 204) are rejected too.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),
}
