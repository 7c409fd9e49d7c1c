//! Axum route handler for industry insights.

use axum::{extract::State, Json};

use crate::auth::{resolve_owner, Session};
use crate::errors::AppError;
use crate::insights::generator;
use crate::models::artifact::IndustryInsightRow;
use crate::state::AppState;

/// GET /api/insights
///
/// Returns the insight for the caller's industry, generating or refreshing
/// it first when absent or stale.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<IndustryInsightRow>, AppError> {
    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let insight = generator::get_or_refresh(state.store.as_ref(), &state.gemini, &user).await?;

    Ok(Json(insight))
}
