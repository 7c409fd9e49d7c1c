//! Axum route handlers for the interview prep API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{resolve_owner, Session};
use crate::errors::AppError;
use crate::interview::quiz::{self, QuizQuestion};
use crate::models::artifact::AssessmentRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SaveResultRequest {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentListResponse {
    pub total: usize,
    pub assessments: Vec<AssessmentRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interview/quiz
///
/// Generates ten multiple-choice questions for the caller's industry and
/// skills.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let questions = quiz::generate_quiz(&state.gemini, &user).await?;

    Ok(Json(GenerateQuizResponse { questions }))
}

/// POST /api/interview/results
///
/// Grades a submitted quiz and persists the assessment.
pub async fn handle_save_result(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SaveResultRequest>,
) -> Result<Json<AssessmentRow>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }
    if request.questions.len() != request.answers.len() {
        return Err(AppError::Validation(
            "answers must match questions one to one".to_string(),
        ));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let assessment = quiz::save_result(
        state.store.as_ref(),
        &state.gemini,
        &user,
        request.questions,
        request.answers,
    )
    .await?;

    Ok(Json(assessment))
}

/// GET /api/interview/assessments
///
/// Lists the caller's assessments, newest first.
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<AssessmentListResponse>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let assessments = state.store.list_assessments(user.id).await?;

    Ok(Json(AssessmentListResponse {
        total: assessments.len(),
        assessments,
    }))
}
