//! Generation requests, model options and prompt validation.

use crate::error::{ValidationError, MAX_PROMPT_CHARS};
use crate::resolution::{select_resolution, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which capability an adapter provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// Synchronous image synthesis.
    Image,
    /// Asynchronous video jobs.
    Video,
}

impl AdapterKind {
    /// Returns the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks a prompt before anything is sent to the backend.
///
/// Length is counted in Unicode scalar values.
pub fn validate_prompt(prompt: Option<&str>, kind: AdapterKind) -> Result<(), ValidationError> {
    let prompt = match prompt {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ValidationError::EmptyPrompt(kind)),
    };
    let len = prompt.chars().count();
    if len > MAX_PROMPT_CHARS {
        return Err(ValidationError::PromptTooLong(len));
    }
    Ok(())
}

/// Backend-specific generation options.
///
/// Keys in `extra` are forwarded verbatim alongside the typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Seed for deterministic generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Explicit resolution tier. Takes precedence over the size hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// Orientation, e.g. "portrait" or "landscape".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// Any further options, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request to generate an image or submit a video job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The text prompt. A missing prompt deserializes as empty.
    #[serde(default)]
    pub prompt: String,
    /// Requested output size as `"WxH"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Backend-specific options.
    #[serde(default)]
    pub model_options: ModelOptions,
}

impl GenerationRequest {
    /// Creates a new request with the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Sets the size hint, e.g. `"1280x720"`.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.model_options.seed = Some(seed);
        self
    }

    /// Sets an explicit resolution tier.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.model_options.resolution = Some(resolution);
        self
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: impl Into<String>) -> Self {
        self.model_options.orientation = Some(orientation.into());
        self
    }

    /// Adds an untyped option forwarded to the backend.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.model_options.extra.insert(key.into(), value.into());
        self
    }

    /// Resolution that will be sent to the backend.
    ///
    /// Options are spread after the size-derived tier, so an explicit
    /// `resolution` option overrides the size hint.
    pub fn effective_resolution(&self) -> Resolution {
        let derived = select_resolution(self.size.as_deref(), self.model_options.resolution);
        self.model_options.resolution.unwrap_or(derived)
    }
}
