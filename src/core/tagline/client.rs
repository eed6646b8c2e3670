use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TaglineGenerator, tagline_prompt};

/// OpenAI-compatible base URL of the hosted inference router.
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/fireworks-ai/v1";
/// Fixed model the tagline prompt is sent to.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-70B-Instruct";
/// Environment variable supplying the API credential.
pub const API_TOKEN_VAR: &str = "HF_TOKEN";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the tagline endpoint.
#[derive(Clone)]
pub struct TaglineConfig {
    pub endpoint: String,
    pub model: String,
    pub api_token: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for TaglineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_token stays out of logs
        f.debug_struct("TaglineConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TaglineConfig {
    /// Default endpoint and model, credential from `HF_TOKEN`.
    /// Fails when the variable is unset so startup can refuse to
    /// initialize the generator.
    pub fn from_env() -> Result<Self, TaglineError> {
        let api_token = std::env::var(API_TOKEN_VAR)
            .map_err(|_| TaglineError::MissingCredential(API_TOKEN_VAR))?;
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Chat message in the completion request and response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Failure taxonomy of the tagline call. `EmptyResponse` is distinct
/// from transport and server failures so callers can tell "the model
/// said nothing" apart from "the call never succeeded".
#[derive(Debug, thiserror::Error)]
pub enum TaglineError {
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: HTTP {status} - {body}")]
    Server { status: u16, body: String },

    #[error("AI returned an empty tagline")]
    EmptyResponse,
}

/// One-shot chat-completion client for tagline generation. No retry,
/// no streaming; a single POST per submission.
#[derive(Debug, Clone)]
pub struct TaglineClient {
    client: Client,
    config: TaglineConfig,
}

impl TaglineClient {
    pub fn new(config: TaglineConfig) -> Result<Self, TaglineError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    async fn request_tagline(&self, project_name: &str) -> Result<String, TaglineError> {
        let url = format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: tagline_prompt(project_name),
            }],
            stream: false,
        };

        debug!(model = %self.config.model, %project_name, "requesting tagline");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaglineError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let tagline = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default();

        if tagline.is_empty() {
            return Err(TaglineError::EmptyResponse);
        }

        Ok(tagline)
    }
}

impl TaglineGenerator for TaglineClient {
    fn generate_tagline(
        &self,
        project_name: &str,
    ) -> impl Future<Output = Result<String, TaglineError>> + Send {
        self.request_tagline(project_name)
    }
}
