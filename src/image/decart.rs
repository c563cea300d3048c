//! Decart image adapter.

use crate::client::{DecartClient, MediaService, SynthesisInput};
use crate::config::{DecartConfig, EnvSource, ProcessEnv, SharedEnv};
use crate::encoding::encode_base64;
use crate::error::Result;
use crate::id::generate_id;
use crate::image::adapter::ImageAdapter;
use crate::image::types::{DecartImageModel, GeneratedImage, ImageResult};
use crate::request::{validate_prompt, AdapterKind, GenerationRequest};
use crate::PROVIDER_NAME;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`DecartImageAdapter`].
#[derive(Clone)]
pub struct DecartImageAdapterBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: DecartImageModel,
    timeout: Option<Duration>,
    env: SharedEnv,
}

impl Default for DecartImageAdapterBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DecartImageModel::default(),
            timeout: None,
            env: Arc::new(ProcessEnv),
        }
    }
}

impl DecartImageAdapterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `DECART_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the API endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the image model.
    pub fn model(mut self, model: DecartImageModel) -> Self {
        self.model = model;
        self
    }

    /// Bounds each HTTP request. Unbounded by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the environment used to look up the API key.
    pub fn env_source(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Builds the adapter, resolving the API key. Makes no network calls.
    pub fn build(self) -> Result<DecartImageAdapter> {
        let config = DecartConfig::resolve(self.api_key, self.base_url, self.env.as_ref())?;
        let client = DecartClient::with_timeout(config, self.timeout)?;
        Ok(DecartImageAdapter::with_service(Arc::new(client), self.model))
    }
}

/// Image adapter backed by Decart's synchronous generation endpoint.
#[derive(Clone)]
pub struct DecartImageAdapter {
    client: Arc<dyn MediaService>,
    model: DecartImageModel,
}

impl DecartImageAdapter {
    /// Creates a new [`DecartImageAdapterBuilder`].
    pub fn builder() -> DecartImageAdapterBuilder {
        DecartImageAdapterBuilder::new()
    }

    /// Creates an adapter over an existing media service.
    pub fn with_service(client: Arc<dyn MediaService>, model: DecartImageModel) -> Self {
        Self { client, model }
    }

    /// Returns the bound model.
    pub fn image_model(&self) -> DecartImageModel {
        self.model
    }
}

impl std::fmt::Debug for DecartImageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecartImageAdapter")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageAdapter for DecartImageAdapter {
    async fn generate_images(&self, request: &GenerationRequest) -> Result<ImageResult> {
        validate_prompt(Some(request.prompt.as_str()), AdapterKind::Image)?;

        let input = SynthesisInput::from_request(self.model.as_str(), request);
        let payload = self.client.process(&input).await?;
        tracing::debug!(
            model = %self.model,
            resolution = %input.resolution,
            bytes = payload.data.len(),
            "image synthesis complete"
        );

        Ok(ImageResult {
            id: generate_id(PROVIDER_NAME),
            model: self.model.as_str().to_string(),
            images: vec![GeneratedImage {
                b64_json: encode_base64(&payload.data),
                revised_prompt: None,
            }],
            usage: None,
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }
}

/// Creates an image adapter with an explicit API key.
pub fn create_decart_image(
    model: DecartImageModel,
    api_key: impl Into<String>,
) -> Result<DecartImageAdapter> {
    DecartImageAdapter::builder()
        .model(model)
        .api_key(api_key)
        .build()
}

/// Creates an image adapter keyed from `DECART_API_KEY`.
pub fn decart_image(model: DecartImageModel) -> Result<DecartImageAdapter> {
    DecartImageAdapter::builder().model(model).build()
}
