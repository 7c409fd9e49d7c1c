//! Axum route handlers for the cover-letter API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{resolve_owner, Session};
use crate::cover_letter::generator::{self, GenerateParams};
use crate::errors::AppError;
use crate::models::artifact::CoverLetterRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateCoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterListResponse {
    pub total: usize,
    pub cover_letters: Vec<CoverLetterRow>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCoverLetterRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateCoverLetterRequest {
    #[serde(default)]
    pub improvement_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteCoverLetterResponse {
    pub deleted: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/cover-letters
///
/// Generates a cover letter from the caller's profile and the given job
/// parameters, persists it, and returns the stored row.
pub async fn handle_generate(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<GenerateCoverLetterRequest>,
) -> Result<Json<CoverLetterRow>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if request.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "company_name cannot be empty".to_string(),
        ));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let letter = generator::generate(
        state.store.as_ref(),
        &state.gemini,
        &user,
        GenerateParams {
            job_title: request.job_title,
            company_name: request.company_name,
            job_description: request.job_description,
        },
    )
    .await?;

    Ok(Json(letter))
}

/// GET /api/cover-letters
///
/// Lists the caller's cover letters, newest first.
pub async fn handle_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CoverLetterListResponse>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let cover_letters = state.store.list_cover_letters(user.id).await?;

    Ok(Json(CoverLetterListResponse {
        total: cover_letters.len(),
        cover_letters,
    }))
}

/// GET /api/cover-letters/:id
pub async fn handle_get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterRow>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let letter = state.store.get_cover_letter(user.id, id).await?;

    Ok(Json(letter))
}

/// PUT /api/cover-letters/:id
///
/// Manual edit of the stored content. Ownership is enforced by the store;
/// someone else's letter comes back as NotFound.
pub async fn handle_update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCoverLetterRequest>,
) -> Result<Json<CoverLetterRow>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let letter = state
        .store
        .update_cover_letter_content(user.id, id, &request.content)
        .await?;

    Ok(Json(letter))
}

/// POST /api/cover-letters/:id/regenerate
///
/// Rewrites the stored letter through the generation pipeline, guided by
/// the improvement notes (a default is applied when absent), and updates
/// the row in place.
pub async fn handle_regenerate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(request): Json<RegenerateCoverLetterRequest>,
) -> Result<Json<CoverLetterRow>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let letter = generator::regenerate(
        state.store.as_ref(),
        &state.gemini,
        &user,
        id,
        request.improvement_notes,
    )
    .await?;

    Ok(Json(letter))
}

/// DELETE /api/cover-letters/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteCoverLetterResponse>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    state.store.delete_cover_letter(user.id, id).await?;

    Ok(Json(DeleteCoverLetterResponse { deleted: true }))
}
