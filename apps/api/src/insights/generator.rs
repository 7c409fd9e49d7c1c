//! Industry insight lifecycle.
//!
//! Insight rows are shared across users and keyed by industry name. They
//! are created on first read, regenerated once stale, and otherwise served
//! as stored. There is no background refresh; staleness is checked on read.

use chrono::{DateTime, Duration, Utc};

use crate::errors::AppError;
use crate::llm_client::outcome::{run_generation, GenerationOutcome};
use crate::llm_client::{GeminiClient, OutputMode};
use crate::models::artifact::{IndustryInsightRow, InsightData};
use crate::models::user::UserRow;
use crate::store::{CareerStore, NewInsight};

use super::{fallback, prompts};

/// Days until a stored insight is due for regeneration.
const REFRESH_INTERVAL_DAYS: i64 = 7;

/// An insight is stale once its due time has been reached.
pub fn is_stale(row: &IndustryInsightRow, now: DateTime<Utc>) -> bool {
    now >= row.next_update
}

/// Store input for a freshly generated payload. `next_update` always lands
/// strictly after `last_updated`, so a refresh pushes the due time forward.
pub fn new_insight(industry: &str, data: InsightData, now: DateTime<Utc>) -> NewInsight {
    NewInsight {
        industry: industry.to_string(),
        data,
        last_updated: now,
        next_update: now + Duration::days(REFRESH_INTERVAL_DAYS),
    }
}

/// Generates insight data through the pipeline in JSON mode. Degradable
/// failures resolve to the static table for the industry; blocked or
/// credential failures surface to the caller.
pub async fn generate_insight_data(
    gemini: &GeminiClient,
    industry: &str,
) -> Result<InsightData, AppError> {
    let prompt = prompts::insight_prompt(industry);
    let outcome = run_generation(gemini, &prompt, OutputMode::Json).await;
    resolve_insight(industry, outcome)
}

fn resolve_insight(industry: &str, outcome: GenerationOutcome) -> Result<InsightData, AppError> {
    outcome
        .resolve_json("industry insight", || fallback::industry_insight(industry))
        .map_err(AppError::from)
}

/// Top skills from the cached insight for the user's industry, used to
/// enrich prompts elsewhere. Missing industry or missing insight yields an
/// empty list; prompts omit their keyword line in that case.
pub async fn cached_top_skills(
    store: &dyn CareerStore,
    user: &UserRow,
) -> Result<Vec<String>, AppError> {
    let Some(industry) = user.industry.as_deref() else {
        return Ok(Vec::new());
    };
    Ok(store
        .find_insight(industry)
        .await?
        .map(|insight| insight.top_skills)
        .unwrap_or_default())
}

/// The caller's industry insight: created on first read, refreshed when
/// stale, returned as stored otherwise. A user without an industry cannot
/// have one.
pub async fn get_or_refresh(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
) -> Result<IndustryInsightRow, AppError> {
    let industry = user
        .industry
        .as_deref()
        .filter(|industry| !industry.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation("Set an industry on your profile to view insights".to_string())
        })?;

    match store.find_insight(industry).await? {
        Some(row) if !is_stale(&row, Utc::now()) => Ok(row),
        existing => {
            let prompt = prompts::insight_prompt(industry);
            let outcome = run_generation(gemini, &prompt, OutputMode::Json).await;
            persist_outcome(store, industry, existing, outcome).await
        }
    }
}

/// Resolves an already-classified outcome and persists the surviving
/// payload: refreshed in place when a (stale) row existed, created
/// otherwise. Split from `get_or_refresh` so tests can drive both
/// persistence branches without a network call.
async fn persist_outcome(
    store: &dyn CareerStore,
    industry: &str,
    existing: Option<IndustryInsightRow>,
    outcome: GenerationOutcome,
) -> Result<IndustryInsightRow, AppError> {
    let data = resolve_insight(industry, outcome)?;
    let input = new_insight(industry, data, Utc::now());
    let row = match existing {
        Some(_) => store.refresh_insight(&input).await?,
        None => store.create_insight(&input).await?,
    };
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use crate::llm_client::outcome::GeneratedContent;
    use crate::store::memory::MemoryStore;

    fn make_user(industry: Option<&str>) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            external_id: "ext-1".to_string(),
            email: "asha@example.com".to_string(),
            name: Some("Asha Rao".to_string()),
            industry: industry.map(str::to_string),
            experience: Some(4),
            bio: None,
            skills: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_staleness_boundary_is_inclusive() {
        let now = Utc::now();
        let store = MemoryStore::new();
        let row = store
            .create_insight(&new_insight(
                "Technology",
                fallback::industry_insight("Technology"),
                now,
            ))
            .await
            .expect("seed");

        assert!(!is_stale(&row, now), "freshly written insight is not stale");
        assert!(
            !is_stale(&row, row.next_update - Duration::seconds(1)),
            "one second before the due time is still fresh"
        );
        assert!(
            is_stale(&row, row.next_update),
            "the due instant itself counts as stale"
        );
    }

    #[test]
    fn test_new_insight_pushes_due_time_forward() {
        let now = Utc::now();
        let input = new_insight("Finance", fallback::industry_insight("Finance"), now);

        assert_eq!(input.last_updated, now);
        assert_eq!(input.next_update, now + Duration::days(7));
        assert!(input.next_update > input.last_updated);
    }

    #[tokio::test]
    async fn test_fresh_insight_is_returned_unchanged() {
        let store = MemoryStore::new();
        let user = make_user(Some("Technology"));
        let seeded = store
            .create_insight(&new_insight(
                "Technology",
                fallback::industry_insight("Technology"),
                Utc::now(),
            ))
            .await
            .expect("seed");

        // Fresh row short-circuits before any provider call is attempted.
        let gemini = GeminiClient::new("unused-key".to_string());
        let row = get_or_refresh(&store, &gemini, &user)
            .await
            .expect("fresh read");

        assert_eq!(row.id, seeded.id);
        assert_eq!(row.next_update, seeded.next_update, "no refresh on a fresh row");
    }

    #[tokio::test]
    async fn test_user_without_industry_is_a_validation_error() {
        let store = MemoryStore::new();
        let gemini = GeminiClient::new("unused-key".to_string());

        let result = get_or_refresh(&store, &gemini, &make_user(None)).await;
        assert_matches!(result, Err(AppError::Validation(_)));

        let result = get_or_refresh(&store, &gemini, &make_user(Some("  "))).await;
        assert_matches!(result, Err(AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_stale_insight_is_refreshed_in_place() {
        let store = MemoryStore::new();
        let stale_at = Utc::now() - Duration::days(30);
        let seeded = store
            .create_insight(&new_insight(
                "Marketing",
                fallback::industry_insight("Marketing"),
                stale_at,
            ))
            .await
            .expect("seed");
        assert!(is_stale(&seeded, Utc::now()));

        let mut data = fallback::industry_insight("Marketing");
        data.growth_rate = 99.9;
        let outcome = GenerationOutcome::Ok(GeneratedContent::Json(
            serde_json::to_value(&data).expect("payload serializes"),
        ));

        let row = persist_outcome(&store, "Marketing", Some(seeded.clone()), outcome)
            .await
            .expect("refresh");

        assert_eq!(row.id, seeded.id, "refresh updates in place");
        assert_eq!(
            row.growth_rate, 99.9,
            "the regenerated payload replaces the stale one"
        );
        assert!(row.next_update > seeded.next_update);
    }

    #[tokio::test]
    async fn test_absent_insight_is_created_from_fallback_on_degradable_failure() {
        let store = MemoryStore::new();
        let outcome = GenerationOutcome::RateLimited {
            raw: "429: quota exceeded".to_string(),
        };

        let row = persist_outcome(&store, "Finance", None, outcome)
            .await
            .expect("degradable failures must still produce a row");

        assert_eq!(row.industry, "Finance");
        assert_eq!(row.growth_rate, 8.5, "static Finance table fills the payload");
        let found = store
            .find_insight("Finance")
            .await
            .expect("lookup")
            .expect("created row is findable");
        assert_eq!(found.id, row.id);
    }
}
