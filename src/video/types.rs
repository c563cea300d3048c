//! Core types for video jobs.

use serde::{Deserialize, Serialize};

/// Decart video models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecartVideoModel {
    /// Lucy Pro text-to-video.
    #[default]
    LucyProT2v,
}

impl DecartVideoModel {
    /// Every supported video model.
    pub const ALL: [Self; 1] = [Self::LucyProT2v];

    /// Returns the API model identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LucyProT2v => "lucy-pro-t2v",
        }
    }
}

impl std::fmt::Display for DecartVideoModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DecartVideoModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown Decart video model: {s}"))
    }
}

/// Job status as reported by the backend.
///
/// The label is kept verbatim; unknown labels land in [`JobState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    /// Queued, not started.
    Pending,
    /// Running.
    Processing,
    /// Finished; the result can be fetched.
    Completed,
    /// Finished without a result.
    Failed,
    /// Any other backend label.
    Other(String),
}

impl JobState {
    /// Returns the backend label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(label) => label,
        }
    }

    /// Returns true once the result is ready to fetch.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if the backend gave up on the job.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl From<String> for JobState {
    fn from(label: String) -> Self {
        match label.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(label),
        }
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handle for a submitted job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJob {
    /// Backend-issued job identifier.
    pub job_id: String,
    /// Model the job was submitted to.
    pub model: String,
    /// Status reported at submission.
    pub status: JobState,
}

/// Current status of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJobStatus {
    /// Job identifier the status was requested for.
    pub job_id: String,
    /// Backend status.
    pub status: JobState,
}

/// Finished video, inlined as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUrl {
    /// Job identifier.
    pub job_id: String,
    /// `data:<mime>;base64,<payload>`.
    pub url: String,
}
