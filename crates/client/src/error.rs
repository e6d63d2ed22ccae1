/// Errors returned by the client.
///
/// `Clone` so that one failed fetch can be handed to every caller waiting
/// on it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connection, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
