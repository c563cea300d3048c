//! Decart video adapter.
//!
//! Jobs live entirely on the backend. The adapter keeps no record of them:
//! submitting, querying and fetching are independent single requests, so one
//! adapter can serve any number of concurrent jobs.

use crate::client::{DecartClient, MediaService, SynthesisInput};
use crate::config::{DecartConfig, EnvSource, ProcessEnv, SharedEnv};
use crate::encoding::to_data_url;
use crate::error::Result;
use crate::request::{validate_prompt, AdapterKind, GenerationRequest};
use crate::video::adapter::VideoAdapter;
use crate::video::types::{DecartVideoModel, JobState, VideoJob, VideoJobStatus, VideoUrl};
use crate::PROVIDER_NAME;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`DecartVideoAdapter`].
#[derive(Clone)]
pub struct DecartVideoAdapterBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: DecartVideoModel,
    timeout: Option<Duration>,
    env: SharedEnv,
}

impl Default for DecartVideoAdapterBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DecartVideoModel::default(),
            timeout: None,
            env: Arc::new(ProcessEnv),
        }
    }
}

impl DecartVideoAdapterBuilder {
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

    /// Sets the video model.
    pub fn model(mut self, model: DecartVideoModel) -> Self {
        self.model = model;
        self
    }

    /// Bounds each HTTP request. This is a per-request limit, not a limit
    /// on how long a job may run.
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
    pub fn build(self) -> Result<DecartVideoAdapter> {
        let config = DecartConfig::resolve(self.api_key, self.base_url, self.env.as_ref())?;
        let client = DecartClient::with_timeout(config, self.timeout)?;
        Ok(DecartVideoAdapter::with_service(Arc::new(client), self.model))
    }
}

/// Video adapter backed by Decart's job queue.
#[derive(Clone)]
pub struct DecartVideoAdapter {
    client: Arc<dyn MediaService>,
    model: DecartVideoModel,
}

impl DecartVideoAdapter {
    /// Creates a new [`DecartVideoAdapterBuilder`].
    pub fn builder() -> DecartVideoAdapterBuilder {
        DecartVideoAdapterBuilder::new()
    }

    /// Creates an adapter over an existing media service.
    pub fn with_service(client: Arc<dyn MediaService>, model: DecartVideoModel) -> Self {
        Self { client, model }
    }

    /// Returns the bound model.
    pub fn video_model(&self) -> DecartVideoModel {
        self.model
    }
}

impl std::fmt::Debug for DecartVideoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecartVideoAdapter")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl VideoAdapter for DecartVideoAdapter {
    async fn create_video_job(&self, request: &GenerationRequest) -> Result<VideoJob> {
        validate_prompt(Some(request.prompt.as_str()), AdapterKind::Video)?;

        let input = SynthesisInput::from_request(self.model.as_str(), request);
        let submitted = self.client.submit(&input).await?;
        tracing::debug!(
            job_id = %submitted.job_id,
            model = %self.model,
            resolution = %input.resolution,
            status = %submitted.status,
            "submitted video job"
        );

        Ok(VideoJob {
            job_id: submitted.job_id,
            model: self.model.as_str().to_string(),
            status: JobState::from(submitted.status),
        })
    }

    async fn get_video_status(&self, job_id: &str) -> Result<VideoJobStatus> {
        let reported = self.client.status(job_id).await?;
        let status = JobState::from(reported.status);
        tracing::debug!(job_id = %job_id, status = %status, "polled video job");

        Ok(VideoJobStatus {
            job_id: job_id.to_string(),
            status,
        })
    }

    async fn get_video_url(&self, job_id: &str) -> Result<VideoUrl> {
        let payload = self.client.result(job_id).await?;
        tracing::debug!(
            job_id = %job_id,
            bytes = payload.data.len(),
            content_type = payload.content_type.as_deref().unwrap_or("<none>"),
            "fetched video job result"
        );

        Ok(VideoUrl {
            job_id: job_id.to_string(),
            url: to_data_url(&payload.data, payload.content_type.as_deref()),
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }
}

/// Creates a video adapter with an explicit API key.
pub fn create_decart_video(
    model: DecartVideoModel,
    api_key: impl Into<String>,
) -> Result<DecartVideoAdapter> {
    DecartVideoAdapter::builder()
        .model(model)
        .api_key(api_key)
        .build()
}

/// Creates a video adapter keyed from `DECART_API_KEY`.
pub fn decart_video(model: DecartVideoModel) -> Result<DecartVideoAdapter> {
    DecartVideoAdapter::builder().model(model).build()
}
