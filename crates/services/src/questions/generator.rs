use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::GenerationError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Number of questions asked of the generator per session.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// What to ask the generator for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRequest {
    pub count: usize,
    pub prompt: String,
}

impl Default for QuestionRequest {
    fn default() -> Self {
        Self::with_count(DEFAULT_QUESTION_COUNT)
    }
}

impl QuestionRequest {
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        let prompt = format!(
            "قم بإنشاء {count} أسئلة مسابقات إسلامية فريدة ومتنوعة (قرآن، سيرة، حديث، فقه). \
             لكل سؤال 4 خيارات مختلفة ورقم الإجابة الصحيحة (0-3)."
        );
        Self { count, prompt }
    }

    /// Structured-output schema describing the expected question array.
    #[must_use]
    pub fn response_schema(&self) -> Value {
        json!({
            "type": "ARRAY",
            "minItems": self.count,
            "maxItems": self.count,
            "items": {
                "type": "OBJECT",
                "properties": {
                    "id": { "type": "INTEGER" },
                    "question": { "type": "STRING" },
                    "options": {
                        "type": "ARRAY",
                        "minItems": 4,
                        "maxItems": 4,
                        "items": { "type": "STRING" }
                    },
                    "correctAnswer": { "type": "INTEGER" }
                },
                "required": ["id", "question", "options", "correctAnswer"]
            }
        })
    }
}

/// Remote text generator producing a raw question payload.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Ask for a question payload and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` for transport, status, or empty-body failures.
    async fn generate(&self, request: &QuestionRequest) -> Result<String, GenerationError>;
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout: Duration,
}

impl GeminiConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("NOOR_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("NOOR_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("NOOR_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let request_timeout = env::var("NOOR_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs);
        Some(Self {
            base_url,
            api_key,
            model,
            request_timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// `QuestionGenerator` backed by the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiGenerator {
    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.config
            .as_ref()
            .map_or(DEFAULT_REQUEST_TIMEOUT, |config| config.request_timeout)
    }
}

#[async_trait]
impl QuestionGenerator for GeminiGenerator {
    async fn generate(&self, request: &QuestionRequest) -> Result<String, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;

        let payload = build_request(request);
        let response = self
            .client
            .post(config.endpoint())
            .header("x-goog-api-key", &config.api_key)
            .timeout(config.request_timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        first_text(body).ok_or(GenerationError::EmptyResponse)
    }
}

fn build_request(request: &QuestionRequest) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart {
                text: request.prompt.clone(),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: request.response_schema(),
        },
    }
}

fn first_text(body: GenerateResponse) -> Option<String> {
    let text: String = body
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
