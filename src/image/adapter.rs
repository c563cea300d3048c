//! Image adapter trait.

use crate::error::Result;
use crate::image::types::ImageResult;
use crate::request::{AdapterKind, GenerationRequest};
use async_trait::async_trait;

/// Capability of generating images in a single round trip.
#[async_trait]
pub trait ImageAdapter: Send + Sync {
    /// Generates images for the given request.
    async fn generate_images(&self, request: &GenerationRequest) -> Result<ImageResult>;

    /// Returns the adapter kind. Always [`AdapterKind::Image`].
    fn kind(&self) -> AdapterKind {
        AdapterKind::Image
    }

    /// Returns the provider name.
    fn name(&self) -> &str;

    /// Returns the bound model identifier.
    fn model(&self) -> &str;
}
