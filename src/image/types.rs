//! Core types for image generation.

use crate::encoding::decode_base64;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decart image models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecartImageModel {
    /// Lucy Pro text-to-image.
    #[default]
    LucyProT2i,
}

impl DecartImageModel {
    /// Every supported image model.
    pub const ALL: [Self; 1] = [Self::LucyProT2i];

    /// Returns the API model identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LucyProT2i => "lucy-pro-t2i",
        }
    }
}

impl std::fmt::Display for DecartImageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DecartImageModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown Decart image model: {s}"))
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes.
    pub b64_json: String,
    /// Prompt as rewritten by the backend, when it does so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl GeneratedImage {
    /// Decodes the payload back into raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        decode_base64(&self.b64_json)
    }

    /// Decodes the payload and writes it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

/// Token or credit metering, when the backend reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Input units consumed.
    pub input_tokens: Option<u64>,
    /// Output units produced.
    pub output_tokens: Option<u64>,
    /// Total units billed.
    pub total_tokens: Option<u64>,
}

/// Result of an image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "generated images should be used or stored"]
pub struct ImageResult {
    /// Correlation id, `decart-<millis>-<suffix>`.
    pub id: String,
    /// Model that produced the images.
    pub model: String,
    /// Generated images, in backend order.
    pub images: Vec<GeneratedImage>,
    /// Metering data. Decart does not report any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_as_str() {
        assert_eq!(DecartImageModel::LucyProT2i.as_str(), "lucy-pro-t2i");
        assert_eq!(DecartImageModel::default().to_string(), "lucy-pro-t2i");
    }

    #[test]
    fn test_model_from_str() {
        let model: DecartImageModel = "lucy-pro-t2i".parse().unwrap();
        assert_eq!(model, DecartImageModel::LucyProT2i);
        assert!("lucy-pro-t2v".parse::<DecartImageModel>().is_err());
    }

    #[test]
    fn test_generated_image_to_bytes() {
        let image = GeneratedImage {
            b64_json: "ZmFrZS1pbWFnZS1kYXRh".into(),
            revised_prompt: None,
        };
        assert_eq!(image.to_bytes().unwrap(), b"fake-image-data");
    }

    #[test]
    fn test_generated_image_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = GeneratedImage {
            b64_json: "ZmFrZS1pbWFnZS1kYXRh".into(),
            revised_prompt: None,
        };
        image.save(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"fake-image-data");
    }

    #[test]
    fn test_result_serialization_skips_empty_fields() {
        let result = ImageResult {
            id: "decart-1-abc".into(),
            model: "lucy-pro-t2i".into(),
            images: vec![GeneratedImage {
                b64_json: "YWJj".into(),
                revised_prompt: None,
            }],
            usage: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("usage").is_none());
        assert!(json["images"][0].get("revised_prompt").is_none());
        assert_eq!(json["images"][0]["b64_json"], "YWJj");
    }
}
