use thiserror::Error;

/// Every way an API call can fail. Callers only ever display it; the
/// `Display` output is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response, or its body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body is not JSON
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
