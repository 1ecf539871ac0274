use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Riot ID not found: {0}")]
    IdentityNotFound(String),

    #[error("API key rejected (HTTP {0}). The key is invalid or has expired")]
    AuthError(u16),

    #[error("Rate limit exceeded, retries exhausted")]
    RateLimited,

    #[error("Endpoint unavailable: HTTP {status} from {endpoint}")]
    EndpointUnavailable { status: u16, endpoint: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No API key available. Set RIOT_API_KEY or paste a key at the prompt")]
    MissingCredential,

    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code carried by the error, when it came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::AuthError(status) => Some(*status),
            AppError::EndpointUnavailable { status, .. } => Some(*status),
            AppError::RateLimited => Some(429),
            _ => None,
        }
    }
}
