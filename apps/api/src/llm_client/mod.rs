/// LLM Client: the single point of entry for all Gemini API calls in Specter.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All oracle interactions MUST go through `CompletionOracle`.
///
/// The client performs exactly one request per call. There is no retry loop:
/// failures surface to the caller immediately.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Google API key not configured")]
    MissingCredential,

    /// The request URL is stripped before wrapping; it carries the key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.without_url())
    }
}

impl LlmError {
    /// True when the call was refused before any network I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, LlmError::MissingCredential)
    }
}

/// Raw oracle output for one prompt: every text part of every candidate, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCompletion {
    fragments: Vec<String>,
}

impl RawCompletion {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.trim().is_empty())
    }

    /// Total number of characters across all fragments.
    pub fn len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }
}

impl From<String> for RawCompletion {
    fn from(text: String) -> Self {
        Self::new(vec![text])
    }
}

impl From<&str> for RawCompletion {
    fn from(text: &str) -> Self {
        Self::new(vec![text.to_string()])
    }
}

/// A text-completion oracle: prompt in, free-form text out.
///
/// Implementations must be safe to call concurrently from independent tasks.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(&self, prompt: &str, timeout: Duration) -> Result<RawCompletion, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_completion(self) -> RawCompletion {
        let fragments = self
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();
        RawCompletion::new(fragments)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client.
///
/// The API key is passed in at construction. A client without a key is valid
/// to build; every call on it fails with `LlmError::MissingCredential`.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    json_mode: bool,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            json_mode: true,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Asks Gemini for `application/json` output. The extractor still runs on the reply.
    pub fn with_json_mode(mut self, enabled: bool) -> Self {
        self.json_mode = enabled;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CompletionOracle for GeminiClient {
    async fn complete(&self, prompt: &str, timeout: Duration) -> Result<RawCompletion, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential)?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: self.json_mode.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .timeout(timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Gemini call timed out after {}ms", timeout.as_millis());
                }
                LlmError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}", status);
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }
        if let Some(reason) = parsed
            .candidates
            .iter()
            .filter_map(|c| c.finish_reason.as_deref())
            .find(|r| *r != "STOP")
        {
            warn!("Gemini candidate finished with reason {reason}");
        }

        Ok(parsed.into_completion())
    }
}
