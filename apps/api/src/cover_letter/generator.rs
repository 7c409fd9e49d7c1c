//! Cover letter generation pipeline.
//!
//! Flow: build prompt → single provider call → classify → use content or
//! degrade to the deterministic fallback → persist owner-scoped. Blocked
//! and credential failures abort before any row is written.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::generator::cached_top_skills;
use crate::llm_client::outcome::{run_generation, GenerationOutcome};
use crate::llm_client::{GeminiClient, OutputMode};
use crate::models::artifact::CoverLetterRow;
use crate::models::user::UserRow;
use crate::store::{CareerStore, NewCoverLetter};

use super::{fallback, prompts};

/// Generation is synchronous, so a persisted letter is always complete.
const STATUS_COMPLETED: &str = "completed";

pub const DEFAULT_IMPROVEMENT_NOTES: &str = "Make it more compelling and professional";

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
}

pub async fn generate(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    params: GenerateParams,
) -> Result<CoverLetterRow, AppError> {
    let keywords = cached_top_skills(store, user).await?;
    let prompt = prompts::generation_prompt(user, &keywords, &params);
    let outcome = run_generation(gemini, &prompt, OutputMode::Text).await;
    persist_outcome(store, user, params, outcome).await
}

pub async fn regenerate(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    letter_id: Uuid,
    improvement_notes: Option<String>,
) -> Result<CoverLetterRow, AppError> {
    let existing = store.get_cover_letter(user.id, letter_id).await?;
    let notes = improvement_notes
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMPROVEMENT_NOTES.to_string());
    let prompt = prompts::regeneration_prompt(&existing.content, &notes);
    let outcome = run_generation(gemini, &prompt, OutputMode::Text).await;
    persist_regenerated(store, user, existing, outcome).await
}

/// Applies the disposition policy to an already-classified outcome and
/// persists the surviving content. Split from `generate` so tests can feed
/// synthetic outcomes without a network call.
async fn persist_outcome(
    store: &dyn CareerStore,
    user: &UserRow,
    params: GenerateParams,
    outcome: GenerationOutcome,
) -> Result<CoverLetterRow, AppError> {
    let content = outcome
        .resolve_text("cover letter", || {
            fallback::cover_letter(user, &params, Utc::now().date_naive())
        })
        .map_err(AppError::from)?;

    let letter = store
        .create_cover_letter(
            user.id,
            &NewCoverLetter {
                content,
                job_description: params.job_description.clone(),
                company_name: params.company_name.clone(),
                job_title: params.job_title.clone(),
                status: STATUS_COMPLETED.to_string(),
            },
        )
        .await?;

    info!(
        "Cover letter {} generated for user {} ({} at {})",
        letter.id, user.id, params.job_title, params.company_name
    );
    Ok(letter)
}

/// Regeneration updates the stored letter in place. Degradable failures
/// fall back to the formulaic letter built from the stored job fields, the
/// same fallback the initial generation uses.
async fn persist_regenerated(
    store: &dyn CareerStore,
    user: &UserRow,
    existing: CoverLetterRow,
    outcome: GenerationOutcome,
) -> Result<CoverLetterRow, AppError> {
    let params = GenerateParams {
        job_title: existing.job_title.clone(),
        company_name: existing.company_name.clone(),
        job_description: existing.job_description.clone(),
    };
    let content = outcome
        .resolve_text("cover letter regeneration", || {
            fallback::cover_letter(user, &params, Utc::now().date_naive())
        })
        .map_err(AppError::from)?;

    let updated = store
        .update_cover_letter_content(user.id, existing.id, &content)
        .await?;

    info!("Cover letter {} regenerated for user {}", updated.id, user.id);
    Ok(updated)
}
