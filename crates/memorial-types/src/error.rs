use thiserror::Error;

/// Error reported by the remote storage gateway for a single call.
///
/// Carries only a human-readable message; the backend owns any richer
/// error structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors produced by a submit attempt.
///
/// `Upload` and `Insert` are the only failures that reach the form status;
/// the other variants reject the attempt before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("File upload failed: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Insert(String),

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("this memory has already been submitted")]
    AlreadySubmitted,

    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
}

impl SubmitError {
    /// Whether this error came back from the gateway (and so belongs in the
    /// form's failed status).
    pub fn is_remote(&self) -> bool {
        matches!(self, SubmitError::Upload(_) | SubmitError::Insert(_))
    }
}

/// Errors related to client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("backend URL is not configured (set MEMORIAL_SUPABASE_URL or supabase_url in config.toml)")]
    MissingUrl,

    #[error("backend API key is not configured (set MEMORIAL_SUPABASE_KEY or supabase_key in config.toml)")]
    MissingKey,

    #[error("invalid backend URL '{0}'")]
    InvalidUrl(String),
}
