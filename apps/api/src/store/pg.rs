//! Postgres implementation of the persistence gateway.
//!
//! Every artifact mutation carries the ownership predicate
//! (`... AND user_id = $owner`) in the statement itself, so a mismatched
//! owner can never affect rows; zero matched rows comes back as
//! `StoreError::NotFound`.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::alumni::query;
use crate::models::alumni::{AlumniFilter, AlumniFilterOptions, AlumnusRow};
use crate::models::artifact::{AssessmentRow, CoverLetterRow, IndustryInsightRow, ResumeRow};
use crate::models::user::{ProfileUpdate, UserRow};

use super::{CareerStore, NewAssessment, NewCoverLetter, NewInsight, StoreError};

/// Upper bound on the profile-update transaction (insight insert + user
/// update). Connection acquisition is separately bounded by the pool's 5s
/// acquire timeout.
const PROFILE_TX_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerStore for PgStore {
    // ── users ───────────────────────────────────────────────────────────

    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRow>, StoreError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update_profile_with_insight(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
        new_insight: Option<&NewInsight>,
    ) -> Result<UserRow, StoreError> {
        let transaction = async {
            let mut tx = self.pool.begin().await?;

            if let Some(insight) = new_insight {
                sqlx::query(
                    r#"
                    INSERT INTO industry_insights
                        (id, industry, salary_ranges, growth_rate, demand_level, top_skills,
                         market_outlook, key_trends, recommended_skills, last_updated, next_update)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(&insight.industry)
                .bind(Json(&insight.data.salary_ranges))
                .bind(insight.data.growth_rate)
                .bind(&insight.data.demand_level)
                .bind(&insight.data.top_skills)
                .bind(&insight.data.market_outlook)
                .bind(&insight.data.key_trends)
                .bind(&insight.data.recommended_skills)
                .bind(insight.last_updated)
                .bind(insight.next_update)
                .execute(&mut *tx)
                .await?;
            }

            let user = sqlx::query_as::<_, UserRow>(
                r#"
                UPDATE users
                SET industry = $2, experience = $3, bio = $4, skills = $5, updated_at = now()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(user_id)
            .bind(&update.industry)
            .bind(update.experience)
            .bind(&update.bio)
            .bind(update.skills.clone().unwrap_or_default())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| StoreError::NotFound("user".to_string()))?;

            tx.commit().await?;
            Ok::<UserRow, StoreError>(user)
        };

        match tokio::time::timeout(PROFILE_TX_TIMEOUT, transaction).await {
            Ok(result) => result,
            Err(_) => {
                info!("Profile update transaction for user {user_id} exceeded {PROFILE_TX_TIMEOUT:?}");
                Err(StoreError::Timeout)
            }
        }
    }

    // ── industry insights ───────────────────────────────────────────────

    async fn find_insight(
        &self,
        industry: &str,
    ) -> Result<Option<IndustryInsightRow>, StoreError> {
        let insight = sqlx::query_as::<_, IndustryInsightRow>(
            "SELECT * FROM industry_insights WHERE industry = $1",
        )
        .bind(industry)
        .fetch_optional(&self.pool)
        .await?;
        Ok(insight)
    }

    async fn create_insight(
        &self,
        insight: &NewInsight,
    ) -> Result<IndustryInsightRow, StoreError> {
        let row = sqlx::query_as::<_, IndustryInsightRow>(
            r#"
            INSERT INTO industry_insights
                (id, industry, salary_ranges, growth_rate, demand_level, top_skills,
                 market_outlook, key_trends, recommended_skills, last_updated, next_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&insight.industry)
        .bind(Json(&insight.data.salary_ranges))
        .bind(insight.data.growth_rate)
        .bind(&insight.data.demand_level)
        .bind(&insight.data.top_skills)
        .bind(&insight.data.market_outlook)
        .bind(&insight.data.key_trends)
        .bind(&insight.data.recommended_skills)
        .bind(insight.last_updated)
        .bind(insight.next_update)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn refresh_insight(
        &self,
        insight: &NewInsight,
    ) -> Result<IndustryInsightRow, StoreError> {
        sqlx::query_as::<_, IndustryInsightRow>(
            r#"
            UPDATE industry_insights
            SET salary_ranges = $2, growth_rate = $3, demand_level = $4, top_skills = $5,
                market_outlook = $6, key_trends = $7, recommended_skills = $8,
                last_updated = $9, next_update = $10
            WHERE industry = $1
            RETURNING *
            "#,
        )
        .bind(&insight.industry)
        .bind(Json(&insight.data.salary_ranges))
        .bind(insight.data.growth_rate)
        .bind(&insight.data.demand_level)
        .bind(&insight.data.top_skills)
        .bind(&insight.data.market_outlook)
        .bind(&insight.data.key_trends)
        .bind(&insight.data.recommended_skills)
        .bind(insight.last_updated)
        .bind(insight.next_update)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("industry insight".to_string()))
    }

    // ── cover letters ───────────────────────────────────────────────────

    async fn create_cover_letter(
        &self,
        user_id: Uuid,
        letter: &NewCoverLetter,
    ) -> Result<CoverLetterRow, StoreError> {
        let row = sqlx::query_as::<_, CoverLetterRow>(
            r#"
            INSERT INTO cover_letters
                (id, user_id, content, job_description, company_name, job_title, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&letter.content)
        .bind(&letter.job_description)
        .bind(&letter.company_name)
        .bind(&letter.job_title)
        .bind(&letter.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, StoreError> {
        let rows = sqlx::query_as::<_, CoverLetterRow>(
            "SELECT * FROM cover_letters WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<CoverLetterRow, StoreError> {
        sqlx::query_as::<_, CoverLetterRow>(
            "SELECT * FROM cover_letters WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("cover letter".to_string()))
    }

    async fn update_cover_letter_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        content: &str,
    ) -> Result<CoverLetterRow, StoreError> {
        sqlx::query_as::<_, CoverLetterRow>(
            r#"
            UPDATE cover_letters
            SET content = $3, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound("cover letter".to_string()))
    }

    async fn delete_cover_letter(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM cover_letters WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("cover letter".to_string()));
        }
        Ok(())
    }

    // ── resumes ─────────────────────────────────────────────────────────

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET content = EXCLUDED.content, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    // ── assessments ─────────────────────────────────────────────────────

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            INSERT INTO assessments
                (id, user_id, quiz_score, questions, category, improvement_tip)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(assessment.quiz_score)
        .bind(Json(&assessment.questions))
        .bind(&assessment.category)
        .bind(&assessment.improvement_tip)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError> {
        let rows = sqlx::query_as::<_, AssessmentRow>(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // ── alumni directory ────────────────────────────────────────────────

    async fn alumni_filter_options(&self) -> Result<AlumniFilterOptions, StoreError> {
        let years: Vec<i32> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT year_of_passing FROM alumni
            WHERE year_of_passing IS NOT NULL
            ORDER BY year_of_passing DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // The nan-variant exclusion mirrors alumni::query::company_is_real.
        let companies: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT company FROM alumni
            WHERE company IS NOT NULL AND company <> ''
              AND company NOT IN ('nan', 'NAN', 'NaN')
            ORDER BY company ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(AlumniFilterOptions { years, companies })
    }

    async fn search_alumni(&self, filter: &AlumniFilter) -> Result<Vec<AlumnusRow>, StoreError> {
        // Same semantics as alumni::query::matches: an absent company filter
        // excludes placeholder companies instead of matching everything, and
        // the search term is escaped so `%`, `_`, and `\` match literally.
        let rows = sqlx::query_as::<_, AlumnusRow>(
            r#"
            SELECT id, name, email, year_of_passing, company, linkedin
            FROM alumni
            WHERE ($1::int4 IS NULL OR year_of_passing = $1)
              AND (
                  CASE
                      WHEN $2::text IS NOT NULL THEN company = $2
                      ELSE company IS NOT NULL AND company <> ''
                           AND company NOT IN ('nan', 'NAN', 'NaN')
                  END
              )
              AND (
                  $3::text IS NULL
                  OR name ILIKE '%' || $3 || '%'
                  OR email ILIKE '%' || $3 || '%'
              )
            ORDER BY lower(name) ASC
            "#,
        )
        .bind(filter.year)
        .bind(&filter.company)
        .bind(filter.search.as_deref().map(query::escape_like))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
