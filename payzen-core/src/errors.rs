use crate::types::HeaderField;

/// Error types for PayZen core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request identifier could not be produced, e.g. the namespace is not a valid UUID.
    #[error("Failed to generate the mandatory request UUID: {0}")]
    GenerationError(#[from] uuid::Error),

    /// A required header is absent from the response envelope.
    #[error("Missing `{0}` header in PayZen SOAP response")]
    MissingHeaderError(HeaderField),

    /// The computed and the supplied auth tokens differ.
    #[error("Bad authToken - Expected `{expected}`, found `{found}`")]
    AuthenticationError { expected: String, found: String },

    /// The secret was rejected as an HMAC key.
    ///
    /// HMAC-SHA256 accepts keys of any length, so [`build_token`](crate::auth::build_token) never
    /// returns this variant.
    #[error("Invalid HMAC secret: {0}")]
    InvalidSecretError(#[from] hmac::digest::InvalidLength),
}

/// A specialized `Result` type for PayZen core operations.
pub type Result<T> = std::result::Result<T, Error>;
