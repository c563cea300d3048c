//! Error types for the Decart adapters.

use crate::request::AdapterKind;

/// Largest prompt accepted by the backend, in characters.
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Pre-flight prompt validation failures. Never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Prompt missing or zero-length. The wording differs per adapter kind.
    #[error("{}", empty_prompt_message(.0))]
    EmptyPrompt(AdapterKind),

    /// Prompt longer than [`MAX_PROMPT_CHARS`]; carries the offending length.
    #[error("Prompt must be 1000 characters or less. Got: {0}")]
    PromptTooLong(usize),
}

fn empty_prompt_message(kind: &AdapterKind) -> &'static str {
    match kind {
        AdapterKind::Image => "Prompt cannot be empty.",
        AdapterKind::Video => "Prompt is required",
    }
}

/// Errors that can occur while talking to Decart.
#[derive(Debug, thiserror::Error)]
pub enum DecartError {
    /// Request rejected locally before any remote call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No API key given explicitly and none found in the environment.
    #[error("{var} is required. Set it in the environment or pass an explicit key with `api_key(...)`.")]
    MissingApiKey {
        /// Environment variable that was consulted.
        var: &'static str,
    },

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with something the client could not make sense of.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Failed to decode base64 data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving a file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecartError {
    /// Returns true for local prompt validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the error originated at the remote media service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Network(_) | Self::Json(_) | Self::UnexpectedResponse(_)
        )
    }

    /// Returns true if this error is likely transient.
    ///
    /// Advisory only: the adapters never retry on their own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, DecartError>;

/// Trims a backend error body down to something fit for an error message.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    const MAX_LEN: usize = 500;
    let text = text.trim();
    if text.chars().count() <= MAX_LEN {
        return text.to_string();
    }
    let truncated: String = text.chars().take(MAX_LEN).collect();
    format!("{truncated}...")
}
