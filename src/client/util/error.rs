use thiserror::Error;

/// Errors surfaced by the storefront API fetchers.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never reached the API (network failure, CORS, aborted).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The response body was not the expected JSON shape.
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
}
