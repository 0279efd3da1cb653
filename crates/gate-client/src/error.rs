use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The upstream could not be reached or the transfer failed mid-flight.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream responded, but the body was not the expected envelope.
    #[error("malformed upstream response: {0}")]
    Decode(String),

    /// Client construction failed (bad timeout, TLS backend, ...).
    #[error("client build failed: {0}")]
    Build(String),
}
