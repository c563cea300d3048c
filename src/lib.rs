#![warn(missing_docs)]
//! Decart image and video generation adapters.
//!
//! Two independent capabilities are exposed: [`ImageAdapter`] for one-shot
//! image synthesis and [`VideoAdapter`] for the asynchronous video job
//! lifecycle (submit, poll, fetch). Both are stateless façades over a
//! [`MediaService`], by default the HTTP [`DecartClient`].
//!
//! # Quick Start - Images
//!
//! ```no_run
//! use decart_adapter::{DecartImageAdapter, GenerationRequest, ImageAdapter};
//!
//! #[tokio::main]
//! async fn main() -> decart_adapter::Result<()> {
//!     let adapter = DecartImageAdapter::builder().build()?;
//!     let request = GenerationRequest::new("A lighthouse at dusk").with_size("1280x720");
//!     let result = adapter.generate_images(&request).await?;
//!     println!("{} -> {} image(s)", result.id, result.images.len());
//!     Ok(())
//! }
//! ```
//!
//! # Quick Start - Videos
//!
//! The adapter never waits on a job; the caller owns the polling loop.
//!
//! ```no_run
//! use decart_adapter::{DecartVideoAdapter, GenerationRequest, VideoAdapter};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> decart_adapter::Result<()> {
//!     let adapter = DecartVideoAdapter::builder().build()?;
//!     let job = adapter
//!         .create_video_job(&GenerationRequest::new("A cat walking"))
//!         .await?;
//!
//!     loop {
//!         let status = adapter.get_video_status(&job.job_id).await?;
//!         if status.status.is_completed() {
//!             break;
//!         }
//!         tokio::time::sleep(Duration::from_secs(2)).await;
//!     }
//!
//!     let video = adapter.get_video_url(&job.job_id).await?;
//!     println!("{} bytes of data URL", video.url.len());
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `image`: [`DecartImageAdapter`]
//! - `video`: [`DecartVideoAdapter`]
//!
//! Both are enabled by default.

mod client;
mod config;
mod encoding;
mod error;
#[cfg(feature = "image")]
mod id;
mod request;
mod resolution;

#[cfg(feature = "image")]
pub mod image;

#[cfg(feature = "video")]
pub mod video;

/// Provider name reported by every adapter.
pub const PROVIDER_NAME: &str = "decart";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use client::{DecartClient, JobStatusResponse, MediaPayload, MediaService, SynthesisInput};
pub use config::{DecartConfig, EnvSource, ProcessEnv, API_KEY_ENV, DEFAULT_BASE_URL};
pub use encoding::{decode_base64, encode_base64, to_data_url, DEFAULT_VIDEO_MIME};
pub use error::{DecartError, Result, ValidationError, MAX_PROMPT_CHARS};
pub use request::{validate_prompt, AdapterKind, GenerationRequest, ModelOptions};
pub use resolution::{select_resolution, Resolution};

#[cfg(feature = "image")]
pub use image::{
    create_decart_image, decart_image, DecartImageAdapter, DecartImageAdapterBuilder,
    DecartImageModel, GeneratedImage, ImageAdapter, ImageResult, Usage,
};

#[cfg(feature = "video")]
pub use video::{
    create_decart_video, decart_video, DecartVideoAdapter, DecartVideoAdapterBuilder,
    DecartVideoModel, JobState, VideoAdapter, VideoJob, VideoJobStatus, VideoUrl,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{DecartError, Result};
    pub use crate::request::GenerationRequest;
    pub use crate::resolution::Resolution;

    #[cfg(feature = "image")]
    pub use crate::image::{DecartImageAdapter, ImageAdapter};

    #[cfg(feature = "video")]
    pub use crate::video::{DecartVideoAdapter, JobState, VideoAdapter};
}
