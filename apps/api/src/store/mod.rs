//! Persistence gateway for all artifact reads and writes.
//!
//! `CareerStore` is the only path to the datastore. Every artifact write is
//! scoped by the owning user id and fails closed (NotFound) when the
//! ownership predicate matches zero rows. `PgStore` is the production
//! implementation; tests swap in the in-memory `MemoryStore` so pipeline
//! and ownership behavior run without Postgres.

#[cfg(test)]
pub mod memory;
pub mod pg;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::alumni::{AlumniFilter, AlumniFilterOptions, AlumnusRow};
use crate::models::artifact::{
    AssessmentRow, CoverLetterRow, IndustryInsightRow, InsightData, QuestionResult, ResumeRow,
};
use crate::models::user::{ProfileUpdate, UserRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("database operation timed out")]
    Timeout,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Input for a new cover letter row. `status` is set by the generation
/// pipeline ("completed" on both primary and fallback content).
#[derive(Debug, Clone)]
pub struct NewCoverLetter {
    pub content: String,
    pub job_description: Option<String>,
    pub company_name: String,
    pub job_title: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub quiz_score: f64,
    pub questions: Vec<QuestionResult>,
    pub category: String,
    pub improvement_tip: Option<String>,
}

/// Input for creating or refreshing an industry insight. The caller decides
/// the timestamps so the staleness rule (`next_update` strictly later after
/// a refresh) stays in domain code, not in SQL.
#[derive(Debug, Clone)]
pub struct NewInsight {
    pub industry: String,
    pub data: InsightData,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}

#[async_trait]
pub trait CareerStore: Send + Sync {
    // ── users ───────────────────────────────────────────────────────────

    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRow>, StoreError>;

    /// Applies a profile update, inserting `new_insight` in the same
    /// transaction when the user's industry has no cached insight yet.
    /// The whole operation is bounded; exceeding the bound surfaces
    /// `StoreError::Timeout`.
    async fn update_profile_with_insight(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
        new_insight: Option<&NewInsight>,
    ) -> Result<UserRow, StoreError>;

    // ── industry insights (shared, keyed by industry) ───────────────────

    async fn find_insight(&self, industry: &str)
        -> Result<Option<IndustryInsightRow>, StoreError>;

    async fn create_insight(&self, insight: &NewInsight)
        -> Result<IndustryInsightRow, StoreError>;

    /// Replaces the payload and timestamps of an existing insight row.
    async fn refresh_insight(
        &self,
        insight: &NewInsight,
    ) -> Result<IndustryInsightRow, StoreError>;

    // ── cover letters ───────────────────────────────────────────────────

    async fn create_cover_letter(
        &self,
        user_id: Uuid,
        letter: &NewCoverLetter,
    ) -> Result<CoverLetterRow, StoreError>;

    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, StoreError>;

    async fn get_cover_letter(&self, user_id: Uuid, id: Uuid)
        -> Result<CoverLetterRow, StoreError>;

    async fn update_cover_letter_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        content: &str,
    ) -> Result<CoverLetterRow, StoreError>;

    async fn delete_cover_letter(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError>;

    // ── resumes (one per user) ──────────────────────────────────────────

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError>;

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError>;

    // ── assessments ─────────────────────────────────────────────────────

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError>;

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError>;

    // ── alumni directory (public, read-only) ────────────────────────────

    async fn alumni_filter_options(&self) -> Result<AlumniFilterOptions, StoreError>;

    async fn search_alumni(&self, filter: &AlumniFilter) -> Result<Vec<AlumnusRow>, StoreError>;
}
