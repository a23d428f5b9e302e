use thiserror::Error;

/// Errors returned by the delivery-area API client.
///
/// A non-201 response is not an error here; it is reported as
/// [`crate::CreateOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
