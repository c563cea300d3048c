//! Remote media service contract and its Decart HTTP implementation.

use crate::config::DecartConfig;
use crate::error::{sanitize_error_message, DecartError, Result};
use crate::request::GenerationRequest;
use crate::resolution::Resolution;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

const API_KEY_HEADER: &str = "X-API-KEY";
const USER_AGENT: &str = concat!("decart-adapter/", env!("CARGO_PKG_VERSION"));

/// Option keys that would clobber fields the adapter derives itself.
const RESERVED_OPTION_KEYS: [&str; 3] = ["model", "prompt", "resolution"];

/// Everything the backend needs to run one synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisInput {
    /// Backend model identifier.
    pub model: String,
    /// Validated prompt.
    pub prompt: String,
    /// Effective resolution tier.
    pub resolution: Resolution,
    /// Remaining model options, merged after the derived fields.
    pub options: Map<String, Value>,
}

impl SynthesisInput {
    /// Builds the backend input for `model` from a (validated) request.
    ///
    /// Typed options go first, then the open `extra` map. Extra keys named
    /// `model`, `prompt` or `resolution` are dropped.
    pub fn from_request(model: &str, request: &GenerationRequest) -> Self {
        let opts = &request.model_options;
        let mut options = Map::new();

        if let Some(seed) = opts.seed {
            options.insert("seed".into(), seed.into());
        }
        if let Some(orientation) = &opts.orientation {
            options.insert("orientation".into(), orientation.clone().into());
        }
        for (key, value) in &opts.extra {
            if RESERVED_OPTION_KEYS.contains(&key.as_str()) {
                tracing::warn!(key = %key, "ignoring model option that shadows a derived field");
                continue;
            }
            options.insert(key.clone(), value.clone());
        }

        Self {
            model: model.to_string(),
            prompt: request.prompt.clone(),
            resolution: request.effective_resolution(),
            options,
        }
    }

    /// Flattens the input into text form fields. Null options are skipped.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("prompt".to_string(), self.prompt.clone()),
            ("resolution".to_string(), self.resolution.as_str().to_string()),
        ];
        for (key, value) in &self.options {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            fields.push((key.clone(), text));
        }
        fields
    }

    fn to_form(&self) -> reqwest::multipart::Form {
        self.form_fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (key, value)| {
                form.text(key, value)
            })
    }
}

/// Raw media returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPayload {
    /// Raw bytes.
    pub data: Vec<u8>,
    /// Content type reported by the backend, if any.
    pub content_type: Option<String>,
}

impl MediaPayload {
    /// Creates a payload from bytes and an optional content type.
    pub fn new(data: Vec<u8>, content_type: Option<String>) -> Self {
        Self { data, content_type }
    }
}

/// Job handle as reported by the backend. `status` is an opaque label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Backend-issued job identifier.
    #[serde(alias = "id")]
    pub job_id: String,
    /// Backend status label, e.g. "pending" or "completed".
    pub status: String,
}

/// The remote media backend.
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Runs a synchronous image synthesis.
    async fn process(&self, input: &SynthesisInput) -> Result<MediaPayload>;

    /// Submits an asynchronous video job.
    async fn submit(&self, input: &SynthesisInput) -> Result<JobStatusResponse>;

    /// Queries the current status of a job.
    async fn status(&self, job_id: &str) -> Result<JobStatusResponse>;

    /// Fetches the finished media of a job.
    async fn result(&self, job_id: &str) -> Result<MediaPayload>;
}

/// HTTP client for the Decart API.
#[derive(Debug, Clone)]
pub struct DecartClient {
    http: reqwest::Client,
    config: DecartConfig,
}

impl DecartClient {
    /// Creates a client with no request timeout.
    pub fn new(config: DecartConfig) -> Result<Self> {
        Self::with_timeout(config, None)
    }

    /// Creates a client, optionally bounding every request by `timeout`.
    pub fn with_timeout(config: DecartConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &DecartConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url(), path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DecartError::Api {
                status: status.as_u16(),
                message: sanitize_error_message(&text),
            });
        }
        Ok(response)
    }

    async fn read_payload(response: reqwest::Response) -> Result<MediaPayload> {
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let data = response.bytes().await?.to_vec();
        Ok(MediaPayload { data, content_type })
    }
}

#[async_trait]
impl MediaService for DecartClient {
    async fn process(&self, input: &SynthesisInput) -> Result<MediaPayload> {
        let url = self.endpoint(&format!("generate/{}", input.model));
        tracing::debug!(
            model = %input.model,
            resolution = %input.resolution,
            "requesting image synthesis"
        );

        let response = self
            .send(self.http.post(&url).multipart(input.to_form()))
            .await?;
        Self::read_payload(response).await
    }

    async fn submit(&self, input: &SynthesisInput) -> Result<JobStatusResponse> {
        let url = self.endpoint(&format!("jobs/{}", input.model));
        tracing::debug!(
            model = %input.model,
            resolution = %input.resolution,
            "submitting video job"
        );

        let response = self
            .send(self.http.post(&url).multipart(input.to_form()))
            .await?;
        Ok(response.json().await?)
    }

    async fn status(&self, job_id: &str) -> Result<JobStatusResponse> {
        let url = self.endpoint(&format!("jobs/{}", job_id));
        let response = self.send(self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    async fn result(&self, job_id: &str) -> Result<MediaPayload> {
        let url = self.endpoint(&format!("jobs/{}/content", job_id));
        let response = self.send(self.http.get(&url)).await?;
        Self::read_payload(response).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_from_request_basic() {
        let req = GenerationRequest::new("A cat walking");
        let input = SynthesisInput::from_request("lucy-pro-t2v", &req);

        assert_eq!(input.model, "lucy-pro-t2v");
        assert_eq!(input.prompt, "A cat walking");
        assert_eq!(input.resolution, Resolution::High);
        assert!(input.options.is_empty());
    }

    #[test]
    fn test_input_spreads_model_options() {
        let req = GenerationRequest::new("A sunset")
            .with_seed(42)
            .with_orientation("portrait")
            .with_option("style", "noir");
        let input = SynthesisInput::from_request("lucy-pro-t2i", &req);

        assert_eq!(input.options["seed"], json!(42));
        assert_eq!(input.options["orientation"], json!("portrait"));
        assert_eq!(input.options["style"], json!("noir"));
    }

    #[test]
    fn test_explicit_resolution_overrides_size() {
        let req = GenerationRequest::new("A sunset")
            .with_size("640x480")
            .with_resolution(Resolution::High);
        let input = SynthesisInput::from_request("lucy-pro-t2i", &req);
        assert_eq!(input.resolution, Resolution::High);
    }

    #[test]
    fn test_reserved_extra_keys_are_dropped() {
        let req = GenerationRequest::new("A sunset")
            .with_size("640x480")
            .with_option("prompt", "something else")
            .with_option("resolution", "720p")
            .with_option("model", "other-model");
        let input = SynthesisInput::from_request("lucy-pro-t2i", &req);

        assert_eq!(input.prompt, "A sunset");
        assert_eq!(input.model, "lucy-pro-t2i");
        assert_eq!(input.resolution, Resolution::Low);
        assert!(input.options.is_empty());
    }

    #[test]
    fn test_form_fields() {
        let req = GenerationRequest::new("A sunset")
            .with_size("1280x720")
            .with_seed(7)
            .with_option("loop", true)
            .with_option("unused", Value::Null);
        let fields = SynthesisInput::from_request("lucy-pro-t2i", &req).form_fields();

        assert_eq!(fields[0], ("prompt".to_string(), "A sunset".to_string()));
        assert_eq!(fields[1], ("resolution".to_string(), "720p".to_string()));
        assert!(fields.contains(&("seed".to_string(), "7".to_string())));
        assert!(fields.contains(&("loop".to_string(), "true".to_string())));
        assert!(!fields.iter().any(|(k, _)| k == "unused"));
    }

    #[test]
    fn test_job_status_deserialization() {
        let resp: JobStatusResponse =
            serde_json::from_str(r#"{"job_id": "job-123", "status": "pending"}"#).unwrap();
        assert_eq!(resp.job_id, "job-123");
        assert_eq!(resp.status, "pending");

        let resp: JobStatusResponse =
            serde_json::from_str(r#"{"id": "job-9", "status": "processing"}"#).unwrap();
        assert_eq!(resp.job_id, "job-9");
    }

    #[test]
    fn test_endpoints() {
        let client =
            DecartClient::new(DecartConfig::new("k").with_base_url("http://localhost:9000/"))
                .unwrap();
        assert_eq!(
            client.endpoint("generate/lucy-pro-t2i"),
            "http://localhost:9000/v1/generate/lucy-pro-t2i"
        );
        assert_eq!(
            client.endpoint("jobs/job-1/content"),
            "http://localhost:9000/v1/jobs/job-1/content"
        );
    }

    #[test]
    fn test_client_with_timeout() {
        let client =
            DecartClient::with_timeout(DecartConfig::new("k"), Some(Duration::from_secs(30)));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().config().base_url(), crate::config::DEFAULT_BASE_URL);
    }
}
