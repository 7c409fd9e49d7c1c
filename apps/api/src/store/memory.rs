//! In-memory `CareerStore` used by tests. Mirrors the ownership and
//! staleness semantics of `PgStore` exactly: mutations filtered by both
//! artifact id and owner id, zero matches reported as NotFound.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::alumni::query;
use crate::models::alumni::{AlumniFilter, AlumniFilterOptions, AlumnusRow};
use crate::models::artifact::{AssessmentRow, CoverLetterRow, IndustryInsightRow, ResumeRow};
use crate::models::user::{ProfileUpdate, UserRow};

use super::{CareerStore, NewAssessment, NewCoverLetter, NewInsight, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<UserRow>>,
    insights: Mutex<Vec<IndustryInsightRow>>,
    cover_letters: Mutex<Vec<CoverLetterRow>>,
    resumes: Mutex<Vec<ResumeRow>>,
    assessments: Mutex<Vec<AssessmentRow>>,
    alumni: Mutex<Vec<AlumnusRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, user: UserRow) {
        self.users.lock().expect("lock poisoned").push(user);
    }

    pub fn seed_insight(&self, insight: IndustryInsightRow) {
        self.insights.lock().expect("lock poisoned").push(insight);
    }

    pub fn seed_cover_letter(&self, letter: CoverLetterRow) {
        self.cover_letters
            .lock()
            .expect("lock poisoned")
            .push(letter);
    }

    pub fn seed_alumni(&self, rows: Vec<AlumnusRow>) {
        self.alumni.lock().expect("lock poisoned").extend(rows);
    }

    fn insight_row(&self, insight: &NewInsight) -> IndustryInsightRow {
        IndustryInsightRow {
            id: Uuid::new_v4(),
            industry: insight.industry.clone(),
            salary_ranges: serde_json::to_value(&insight.data.salary_ranges)
                .expect("salary ranges serialize"),
            growth_rate: insight.data.growth_rate,
            demand_level: insight.data.demand_level.clone(),
            top_skills: insight.data.top_skills.clone(),
            market_outlook: insight.data.market_outlook.clone(),
            key_trends: insight.data.key_trends.clone(),
            recommended_skills: insight.data.recommended_skills.clone(),
            last_updated: insight.last_updated,
            next_update: insight.next_update,
        }
    }
}

#[async_trait]
impl CareerStore for MemoryStore {
    async fn find_user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<UserRow>, StoreError> {
        Ok(self
            .users
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn update_profile_with_insight(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
        new_insight: Option<&NewInsight>,
    ) -> Result<UserRow, StoreError> {
        if let Some(insight) = new_insight {
            self.insights
                .lock()
                .expect("lock poisoned")
                .push(self.insight_row(insight));
        }

        let mut users = self.users.lock().expect("lock poisoned");
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| StoreError::NotFound("user".to_string()))?;
        user.industry = Some(update.industry.clone());
        user.experience = update.experience;
        user.bio = update.bio.clone();
        user.skills = update.skills.clone().unwrap_or_default();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn find_insight(
        &self,
        industry: &str,
    ) -> Result<Option<IndustryInsightRow>, StoreError> {
        Ok(self
            .insights
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|i| i.industry == industry)
            .cloned())
    }

    async fn create_insight(
        &self,
        insight: &NewInsight,
    ) -> Result<IndustryInsightRow, StoreError> {
        let row = self.insight_row(insight);
        self.insights
            .lock()
            .expect("lock poisoned")
            .push(row.clone());
        Ok(row)
    }

    async fn refresh_insight(
        &self,
        insight: &NewInsight,
    ) -> Result<IndustryInsightRow, StoreError> {
        let mut insights = self.insights.lock().expect("lock poisoned");
        let existing = insights
            .iter_mut()
            .find(|i| i.industry == insight.industry)
            .ok_or_else(|| StoreError::NotFound("industry insight".to_string()))?;
        let id = existing.id;
        *existing = self.insight_row(insight);
        existing.id = id;
        Ok(existing.clone())
    }

    async fn create_cover_letter(
        &self,
        user_id: Uuid,
        letter: &NewCoverLetter,
    ) -> Result<CoverLetterRow, StoreError> {
        let now = Utc::now();
        let row = CoverLetterRow {
            id: Uuid::new_v4(),
            user_id,
            content: letter.content.clone(),
            job_description: letter.job_description.clone(),
            company_name: letter.company_name.clone(),
            job_title: letter.job_title.clone(),
            status: letter.status.clone(),
            created_at: now,
            updated_at: now,
        };
        self.cover_letters
            .lock()
            .expect("lock poisoned")
            .push(row.clone());
        Ok(row)
    }

    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, StoreError> {
        let mut rows: Vec<CoverLetterRow> = self
            .cover_letters
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<CoverLetterRow, StoreError> {
        self.cover_letters
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|l| l.id == id && l.user_id == user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("cover letter".to_string()))
    }

    async fn update_cover_letter_content(
        &self,
        user_id: Uuid,
        id: Uuid,
        content: &str,
    ) -> Result<CoverLetterRow, StoreError> {
        let mut letters = self.cover_letters.lock().expect("lock poisoned");
        let letter = letters
            .iter_mut()
            .find(|l| l.id == id && l.user_id == user_id)
            .ok_or_else(|| StoreError::NotFound("cover letter".to_string()))?;
        letter.content = content.to_string();
        letter.updated_at = Utc::now();
        Ok(letter.clone())
    }

    async fn delete_cover_letter(&self, user_id: Uuid, id: Uuid) -> Result<(), StoreError> {
        let mut letters = self.cover_letters.lock().expect("lock poisoned");
        let before = letters.len();
        letters.retain(|l| !(l.id == id && l.user_id == user_id));
        if letters.len() == before {
            return Err(StoreError::NotFound("cover letter".to_string()));
        }
        Ok(())
    }

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError> {
        let mut resumes = self.resumes.lock().expect("lock poisoned");
        if let Some(resume) = resumes.iter_mut().find(|r| r.user_id == user_id) {
            resume.content = content.to_string();
            resume.updated_at = Utc::now();
            return Ok(resume.clone());
        }
        let now = Utc::now();
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        resumes.push(row.clone());
        Ok(row)
    }

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError> {
        Ok(self
            .resumes
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|r| r.user_id == user_id)
            .cloned())
    }

    async fn create_assessment(
        &self,
        user_id: Uuid,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError> {
        let now = Utc::now();
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id,
            quiz_score: assessment.quiz_score,
            questions: serde_json::to_value(&assessment.questions)
                .expect("question results serialize"),
            category: assessment.category.clone(),
            improvement_tip: assessment.improvement_tip.clone(),
            created_at: now,
            updated_at: now,
        };
        self.assessments
            .lock()
            .expect("lock poisoned")
            .push(row.clone());
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError> {
        let mut rows: Vec<AssessmentRow> = self
            .assessments
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn alumni_filter_options(&self) -> Result<AlumniFilterOptions, StoreError> {
        let alumni = self.alumni.lock().expect("lock poisoned");

        let mut years: Vec<i32> = alumni.iter().filter_map(|a| a.year_of_passing).collect();
        years.sort_unstable();
        years.dedup();
        years.reverse();

        let mut companies: Vec<String> = alumni
            .iter()
            .filter_map(|a| a.company.as_deref())
            .filter(|c| query::company_is_real(Some(c)))
            .map(str::to_string)
            .collect();
        companies.sort();
        companies.dedup();

        Ok(AlumniFilterOptions { years, companies })
    }

    async fn search_alumni(&self, filter: &AlumniFilter) -> Result<Vec<AlumnusRow>, StoreError> {
        let mut rows: Vec<AlumnusRow> = self
            .alumni
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|a| query::matches(filter, a))
            .cloned()
            .collect();
        // Same ordering as PgStore's `ORDER BY lower(name) ASC`.
        rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_alumnus(name: &str) -> AlumnusRow {
        AlumnusRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            year_of_passing: Some(2020),
            company: Some("Acme".to_string()),
            linkedin: None,
        }
    }

    #[tokio::test]
    async fn test_search_orders_names_case_insensitively() {
        let store = MemoryStore::new();
        store.seed_alumni(vec![
            make_alumnus("zara"),
            make_alumnus("Anil"),
            make_alumnus("beth"),
        ]);

        let rows = store
            .search_alumni(&AlumniFilter::default())
            .await
            .expect("search");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Anil", "beth", "zara"],
            "ordering must not depend on letter case"
        );
    }
}
