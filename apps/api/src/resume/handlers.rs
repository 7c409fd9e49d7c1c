//! Axum route handlers for the resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{resolve_owner, Session};
use crate::errors::AppError;
use crate::models::artifact::ResumeRow;
use crate::resume::improve::{self, SectionImprovement, SectionInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub current: String,
    pub section_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume
///
/// Upserts the caller's single resume.
pub async fn handle_save(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let resume = state.store.upsert_resume(user.id, &request.content).await?;

    Ok(Json(resume))
}

/// GET /api/resume
pub async fn handle_get(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<ResumeRow>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let resume = state
        .store
        .get_resume(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(resume))
}

/// POST /api/resume/improve
///
/// Improves one section through the generation pipeline and returns the
/// text without persisting it.
pub async fn handle_improve(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if request.current.trim().is_empty() {
        return Err(AppError::Validation("current cannot be empty".to_string()));
    }
    if request.section_type.trim().is_empty() {
        return Err(AppError::Validation(
            "section_type cannot be empty".to_string(),
        ));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let improved = improve::improve_section(
        state.store.as_ref(),
        &state.gemini,
        &user,
        &request.current,
        &request.section_type,
    )
    .await?;

    Ok(Json(ImproveResponse { improved }))
}

/// POST /api/resume/improve-batch
///
/// Improves sections strictly in request order; a fatal provider failure
/// aborts the remainder.
pub async fn handle_improve_batch(
    State(state): State<AppState>,
    session: Session,
    Json(sections): Json<Vec<SectionInput>>,
) -> Result<Json<Vec<SectionImprovement>>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let improvements =
        improve::improve_batch(state.store.as_ref(), &state.gemini, &user, sections).await?;

    Ok(Json(improvements))
}

/// POST /api/resume/summary
///
/// Generates a professional summary from the caller's profile.
pub async fn handle_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SummaryResponse>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let summary = improve::professional_summary(&state.gemini, &user).await?;

    Ok(Json(SummaryResponse { summary }))
}
