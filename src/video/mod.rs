//! Video job module.

mod adapter;
mod decart;
mod types;

pub use adapter::VideoAdapter;
pub use decart::{create_decart_video, decart_video, DecartVideoAdapter, DecartVideoAdapterBuilder};
pub use types::{DecartVideoModel, JobState, VideoJob, VideoJobStatus, VideoUrl};
