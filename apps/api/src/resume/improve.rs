//! Resume text improvement through the generation pipeline.
//!
//! Improved text is returned to the client, never persisted here. Saving
//! the resume is a separate, explicit call.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::generator::cached_top_skills;
use crate::llm_client::outcome::{run_generation, GenerationOutcome};
use crate::llm_client::{GeminiClient, OutputMode};
use crate::models::user::UserRow;
use crate::store::CareerStore;

use super::{fallback, prompts};

/// One section of the batch improvement request. The id is an opaque
/// client-side handle echoed back with the result.
#[derive(Debug, Deserialize)]
pub struct SectionInput {
    pub id: String,
    pub content: String,
    pub section_type: String,
}

#[derive(Debug, Serialize)]
pub struct SectionImprovement {
    pub id: String,
    pub improved: String,
}

/// Improves a single section. Degradable failures resolve to the formulaic
/// rewrite of the original text.
pub async fn improve_section(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    current: &str,
    section_type: &str,
) -> Result<String, AppError> {
    let top_skills = cached_top_skills(store, user).await?;
    let prompt = prompts::improve_prompt(user, &top_skills, current, section_type);
    let outcome = run_generation(gemini, &prompt, OutputMode::Text).await;
    resolve_improvement(outcome, current)
}

fn resolve_improvement(outcome: GenerationOutcome, current: &str) -> Result<String, AppError> {
    outcome
        .resolve_text("resume improvement", || fallback::improved_section(current))
        .map_err(AppError::from)
}

/// Improves sections strictly in order. A fatal failure aborts the
/// remaining sections and discards earlier results; degradable failures
/// fall back per section and the batch continues.
pub async fn improve_batch(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    sections: Vec<SectionInput>,
) -> Result<Vec<SectionImprovement>, AppError> {
    let mut improvements = Vec::with_capacity(sections.len());
    for section in sections {
        let improved =
            improve_section(store, gemini, user, &section.content, &section.section_type).await?;
        improvements.push(SectionImprovement {
            id: section.id,
            improved,
        });
    }
    Ok(improvements)
}

/// Generates a 3-4 sentence professional summary from the profile.
pub async fn professional_summary(
    gemini: &GeminiClient,
    user: &UserRow,
) -> Result<String, AppError> {
    let prompt = prompts::summary_prompt(user);
    let outcome = run_generation(gemini, &prompt, OutputMode::Text).await;
    outcome
        .resolve_text("resume summary", || fallback::professional_summary(user))
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::llm_client::outcome::GeneratedContent;

    #[test]
    fn test_ok_outcome_passes_text_through() {
        let outcome = GenerationOutcome::Ok(GeneratedContent::Text(
            "Led a cross-team migration to Rust services.".to_string(),
        ));

        let improved = resolve_improvement(outcome, "migrated services").expect("ok");
        assert_eq!(improved, "Led a cross-team migration to Rust services.");
    }

    #[test]
    fn test_degradable_outcome_resolves_to_formulaic_rewrite() {
        let outcome = GenerationOutcome::RateLimited {
            raw: "quota exceeded".to_string(),
        };

        let improved = resolve_improvement(outcome, "Built a website").expect("degrades");
        assert!(improved.contains("built a website"));
        assert!(improved.contains("Achieved measurable improvements"));
        assert!(!improved.contains("quota"), "provider error text must not leak");
    }

    #[test]
    fn test_blocked_outcome_is_fatal() {
        let outcome = GenerationOutcome::Blocked {
            reason: "SAFETY".to_string(),
        };

        let result = resolve_improvement(outcome, "migrated services");
        assert_matches!(result, Err(AppError::ContentBlocked(_)));
    }
}
