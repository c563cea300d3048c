//! Video adapter trait.

use crate::error::Result;
use crate::request::{AdapterKind, GenerationRequest};
use crate::video::types::{VideoJob, VideoJobStatus, VideoUrl};
use async_trait::async_trait;

/// Capability of running asynchronous video jobs.
///
/// Every operation is a single round trip to the backend. Polling cadence,
/// backoff and giving up are left to the caller.
#[async_trait]
pub trait VideoAdapter: Send + Sync {
    /// Submits a job and returns immediately with its handle.
    async fn create_video_job(&self, request: &GenerationRequest) -> Result<VideoJob>;

    /// Reports the backend's current status for `job_id`.
    async fn get_video_status(&self, job_id: &str) -> Result<VideoJobStatus>;

    /// Fetches the finished video as a data URL.
    ///
    /// Call only once the job has completed; the backend's answer for an
    /// unfinished job is surfaced as-is.
    async fn get_video_url(&self, job_id: &str) -> Result<VideoUrl>;

    /// Returns the adapter kind. Always [`AdapterKind::Video`].
    fn kind(&self) -> AdapterKind {
        AdapterKind::Video
    }

    /// Returns the provider name.
    fn name(&self) -> &str;

    /// Returns the bound model identifier.
    fn model(&self) -> &str;
}
