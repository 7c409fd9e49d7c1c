//! Profile update orchestration.
//!
//! Insight presence is checked before the transaction and any generation
//! happens outside it, so the transaction itself holds only two fast
//! statements: insert the new insight (if one was generated) and update
//! the user row.

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::insights::generator::{generate_insight_data, new_insight};
use crate::llm_client::GeminiClient;
use crate::models::user::{ProfileUpdate, UserRow};
use crate::store::CareerStore;

/// A user counts as onboarded once their industry is set.
pub fn is_onboarded(user: Option<&UserRow>) -> bool {
    user.and_then(|u| u.industry.as_deref())
        .map(|industry| !industry.trim().is_empty())
        .unwrap_or(false)
}

pub async fn update_profile(
    store: &dyn CareerStore,
    gemini: &GeminiClient,
    user: &UserRow,
    update: ProfileUpdate,
) -> Result<UserRow, AppError> {
    let fresh_insight = match store.find_insight(&update.industry).await? {
        Some(_) => None,
        None => {
            let data = generate_insight_data(gemini, &update.industry).await?;
            Some(new_insight(&update.industry, data, Utc::now()))
        }
    };

    let updated = store
        .update_profile_with_insight(user.id, &update, fresh_insight.as_ref())
        .await?;

    info!(
        "Profile updated for user {} (industry {})",
        updated.id, update.industry
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::insights::fallback;
    use crate::insights::generator;
    use crate::store::memory::MemoryStore;

    fn make_user(industry: Option<&str>) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            external_id: "ext-1".to_string(),
            email: "asha@example.com".to_string(),
            name: Some("Asha Rao".to_string()),
            industry: industry.map(str::to_string),
            experience: None,
            bio: None,
            skills: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_onboarding_requires_a_set_industry() {
        assert!(!is_onboarded(None), "unknown identity is not onboarded");
        assert!(!is_onboarded(Some(&make_user(None))));
        assert!(!is_onboarded(Some(&make_user(Some("  ")))));
        assert!(is_onboarded(Some(&make_user(Some("Technology")))));
    }

    #[tokio::test]
    async fn test_update_with_cached_insight_skips_generation() {
        let store = MemoryStore::new();
        let user = make_user(None);
        store.seed_user(user.clone());
        store
            .create_insight(&generator::new_insight(
                "Finance",
                fallback::industry_insight("Finance"),
                Utc::now() - Duration::days(1),
            ))
            .await
            .expect("seed insight");

        // The cached insight short-circuits before any provider call.
        let gemini = GeminiClient::new("unused-key".to_string());
        let updated = update_profile(
            &store,
            &gemini,
            &user,
            ProfileUpdate {
                industry: "Finance".to_string(),
                experience: Some(3),
                bio: Some("Analyst".to_string()),
                skills: Some(vec!["Excel".to_string()]),
            },
        )
        .await
        .expect("update");

        assert_eq!(updated.industry.as_deref(), Some("Finance"));
        assert_eq!(updated.experience, Some(3));
        assert_eq!(updated.skills, vec!["Excel".to_string()]);

        // Still exactly the seeded insight row.
        let insight = store
            .find_insight("Finance")
            .await
            .expect("lookup")
            .expect("present");
        assert!(insight.last_updated < Utc::now() - Duration::hours(23));
    }
}
