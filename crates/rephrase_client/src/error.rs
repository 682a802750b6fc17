use thiserror::Error;

/// Errors surfaced by the top-level rephrase operation.
#[derive(Debug, Error)]
pub enum RephraseError {
    /// The primary text (or text joined with the tone descriptor) does not
    /// fit the configured token ceiling.
    #[error("token limit exceeded: {tokens} tokens over a ceiling of {ceiling}")]
    TokenLimitExceeded { tokens: u32, ceiling: u32 },

    /// The secret key or user token is blank after trimming whitespace.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The proxy server path is not a usable http(s) URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RephraseError>;
