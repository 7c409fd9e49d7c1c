//! Response classification for Gemini calls.
//!
//! Every provider result lands in exactly one of six terminal states, and
//! each state has a fixed disposition: use the content, degrade to the
//! deterministic fallback, or fail the request. Classification prefers
//! structured codes (HTTP status, Gemini's symbolic status) and only falls
//! back to message-substring matching when no structured code settles the
//! category. The substring rules are a documented heuristic, not a
//! guarantee: provider messages are not a stable interface.

use tracing::warn;

use super::{GenerateContentResponse, OutputMode, ProviderError, MODEL};

/// Usable content extracted from a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    Text(String),
    Json(serde_json::Value),
}

/// Terminal classification of one provider call. No further transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Ok(GeneratedContent),
    Blocked {
        reason: String,
    },
    RateLimited {
        raw: String,
    },
    ServiceError {
        raw: String,
        /// True when the failure looked like a missing model rather than a
        /// transient outage. Still degradable, but logged on its own so a
        /// persistent deployment misconfiguration stays visible.
        model_missing: bool,
    },
    AuthError {
        raw: String,
    },
    Unknown {
        raw: String,
    },
}

/// What the pipeline does with a classified outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    /// Success: persist or return this content.
    Use(GeneratedContent),
    /// Recoverable failure: substitute fallback content and continue as if
    /// the call had succeeded.
    Degrade { raw: String },
    /// Unrecoverable failure: surface to the caller, persist nothing.
    Fatal(FatalKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FatalKind {
    /// Safety filters rejected the prompt; the user has to rephrase.
    Blocked { reason: String },
    /// The provider rejected our credentials; masking this with fallback
    /// content would hide an operator misconfiguration.
    Credential { message: String },
}

impl GenerationOutcome {
    pub fn disposition(self) -> Disposition {
        match self {
            GenerationOutcome::Ok(content) => Disposition::Use(content),
            GenerationOutcome::Blocked { reason } => {
                Disposition::Fatal(FatalKind::Blocked { reason })
            }
            GenerationOutcome::AuthError { raw } => {
                Disposition::Fatal(FatalKind::Credential { message: raw })
            }
            GenerationOutcome::RateLimited { raw }
            | GenerationOutcome::ServiceError { raw, .. }
            | GenerationOutcome::Unknown { raw } => Disposition::Degrade { raw },
        }
    }

    /// Resolves a text-mode outcome: `ok` content is used as-is, degradable
    /// failures are absorbed by substituting `fallback()`, fatal failures
    /// surface to the caller. `label` names the operation in logs.
    pub fn resolve_text(self, label: &str, fallback: impl FnOnce() -> String) -> Result<String, FatalKind> {
        match self.disposition() {
            Disposition::Use(GeneratedContent::Text(text)) => Ok(text),
            Disposition::Use(GeneratedContent::Json(_)) => {
                warn!("{label}: expected text content, got structured JSON; using fallback");
                Ok(fallback())
            }
            Disposition::Degrade { raw } => {
                warn!("{label}: generation degraded to fallback: {raw}");
                Ok(fallback())
            }
            Disposition::Fatal(kind) => Err(kind),
        }
    }

    /// Resolves a JSON-mode outcome into `T`. A payload that parses as JSON
    /// but does not match the expected shape counts as degradable, same as
    /// unparseable output.
    pub fn resolve_json<T: serde::de::DeserializeOwned>(
        self,
        label: &str,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, FatalKind> {
        match self.disposition() {
            Disposition::Use(GeneratedContent::Json(value)) => {
                match serde_json::from_value(value) {
                    Ok(parsed) => Ok(parsed),
                    Err(e) => {
                        warn!("{label}: structured content has the wrong shape, using fallback: {e}");
                        Ok(fallback())
                    }
                }
            }
            Disposition::Use(GeneratedContent::Text(_)) => {
                warn!("{label}: expected structured JSON, got text; using fallback");
                Ok(fallback())
            }
            Disposition::Degrade { raw } => {
                warn!("{label}: generation degraded to fallback: {raw}");
                Ok(fallback())
            }
            Disposition::Fatal(kind) => Err(kind),
        }
    }
}

/// Classifies one provider call result. Rules apply in priority order:
/// block reason, rate limit, model-not-found, credential, 5xx, empty
/// content, then success with mode-dependent content extraction.
pub fn classify(
    result: Result<GenerateContentResponse, ProviderError>,
    mode: OutputMode,
) -> GenerationOutcome {
    match result {
        Ok(response) => classify_response(response, mode),
        Err(err) => classify_error(&err),
    }
}

/// One provider call followed by classification. The pipeline entry point
/// every feature module uses.
pub async fn run_generation(
    client: &super::GeminiClient,
    prompt: &str,
    mode: OutputMode,
) -> GenerationOutcome {
    classify(client.generate(prompt, mode).await, mode)
}

fn classify_response(response: GenerateContentResponse, mode: OutputMode) -> GenerationOutcome {
    if let Some(reason) = response.block_reason() {
        return GenerationOutcome::Blocked {
            reason: reason.to_string(),
        };
    }

    let text = match response.text() {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => {
            return GenerationOutcome::Unknown {
                raw: "provider returned empty content".to_string(),
            }
        }
    };

    match mode {
        OutputMode::Text => GenerationOutcome::Ok(GeneratedContent::Text(text.to_string())),
        OutputMode::Json => match serde_json::from_str(super::strip_json_fences(text)) {
            Ok(value) => GenerationOutcome::Ok(GeneratedContent::Json(value)),
            Err(e) => GenerationOutcome::Unknown {
                raw: format!("unparseable JSON content: {e}"),
            },
        },
    }
}

fn classify_error(err: &ProviderError) -> GenerationOutcome {
    let raw = err.to_string();

    if let ProviderError::Api {
        http_status,
        provider_status,
        ..
    } = err
    {
        let provider_status = provider_status.as_deref();

        if *http_status == 429 || provider_status == Some("RESOURCE_EXHAUSTED") {
            return GenerationOutcome::RateLimited { raw };
        }
        if *http_status == 404 || provider_status == Some("NOT_FOUND") {
            return model_missing(raw);
        }
        if matches!(*http_status, 401 | 403)
            || matches!(
                provider_status,
                Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED")
            )
        {
            return GenerationOutcome::AuthError { raw };
        }
        if *http_status >= 500 || matches!(provider_status, Some("INTERNAL") | Some("UNAVAILABLE"))
        {
            return GenerationOutcome::ServiceError {
                raw,
                model_missing: false,
            };
        }
    }

    classify_message(raw)
}

/// Substring fallback for errors whose structured codes did not settle the
/// category (transport failures, HTTP 400 with an odd body). Checked in the
/// same priority order as the structured rules.
fn classify_message(raw: String) -> GenerationOutcome {
    let lowered = raw.to_lowercase();

    if lowered.contains("quota") || lowered.contains("429") {
        GenerationOutcome::RateLimited { raw }
    } else if lowered.contains("not found") || lowered.contains("404") {
        model_missing(raw)
    } else if lowered.contains("api key") || lowered.contains("api_key") {
        GenerationOutcome::AuthError { raw }
    } else if lowered.contains("500") || lowered.contains("503") {
        GenerationOutcome::ServiceError {
            raw,
            model_missing: false,
        }
    } else {
        GenerationOutcome::Unknown { raw }
    }
}

fn model_missing(raw: String) -> GenerationOutcome {
    warn!(
        "Gemini model '{MODEL}' not found; serving fallback content. \
         Check the deployment configuration if this persists: {raw}"
    );
    GenerationOutcome::ServiceError {
        raw,
        model_missing: true,
    }
}
