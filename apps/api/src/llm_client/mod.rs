//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All generation requests MUST go through this module, and every result
//! MUST pass through `outcome::classify` before anything acts on it.
//!
//! Model: gemini-2.5-flash-lite (hardcoded: do not make configurable to
//! prevent drift between environments).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod outcome;
pub mod prompts;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
/// The model used for all generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash-lite";

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Whether the caller expects free text or a JSON document.
/// JSON mode sets the response MIME type and triggers fence-strip + parse
/// during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {http_status}): {message}")]
    Api {
        http_status: u16,
        /// Gemini's symbolic status (e.g. RESOURCE_EXHAUSTED), when the
        /// error body was structured enough to carry one.
        provider_status: Option<String>,
        message: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    safety_settings: Vec<SafetySetting>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

impl GenerationConfig {
    fn for_mode(mode: OutputMode) -> Self {
        GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: match mode {
                OutputMode::Text => None,
                OutputMode::Json => Some("application/json"),
            },
        }
    }
}

/// Block only on high-severity content in all four harm categories.
fn safety_settings() -> Vec<SafetySetting> {
    const CATEGORIES: [&str; 4] = [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];
    CATEGORIES
        .iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_ONLY_HIGH",
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    status: Option<String>,
    message: String,
}

/// The single Gemini client shared by all services.
///
/// Makes exactly one outbound call per invocation. There is no retry loop
/// here: `outcome::classify` decides whether a failure is fatal or the
/// caller degrades to deterministic fallback content.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes a raw generateContent call, returning the full response object
    /// or a categorized failure.
    pub async fn generate(
        &self,
        prompt: &str,
        mode: OutputMode,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let request_body = build_request(prompt, mode);
        let url = format!("{GEMINI_API_URL}/v1beta/models/{MODEL}:generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Gemini errors usually arrive as {"error": {code, status, message}};
            // fall back to the raw body when they do not.
            let (provider_status, message) = match serde_json::from_str::<GeminiErrorEnvelope>(&body)
            {
                Ok(envelope) => (envelope.error.status, envelope.error.message),
                Err(_) => (None, body),
            };
            warn!("Gemini API returned {status}: {message}");
            return Err(ProviderError::Api {
                http_status: status.as_u16(),
                provider_status,
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        debug!(
            "Gemini call succeeded: candidates={}, blocked={}",
            parsed.candidates.len(),
            parsed.block_reason().is_some()
        );
        Ok(parsed)
    }
}

fn build_request(prompt: &str, mode: OutputMode) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part { text: prompt }],
        }],
        safety_settings: safety_settings(),
        generation_config: GenerationConfig::for_mode(mode),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
