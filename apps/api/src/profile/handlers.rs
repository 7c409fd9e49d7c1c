//! Axum route handlers for profile and onboarding.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::{resolve_owner, Session};
use crate::errors::AppError;
use crate::models::user::{ProfileUpdate, UserRow};
use crate::profile::update::{self, is_onboarded};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub is_onboarded: bool,
}

/// GET /api/profile/onboarding
///
/// Whether the caller has completed onboarding. An identity with no user
/// row is simply not onboarded, not an error.
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<OnboardingResponse>, AppError> {
    let user = state
        .store
        .find_user_by_external_id(&session.external_id)
        .await?;

    Ok(Json(OnboardingResponse {
        is_onboarded: is_onboarded(user.as_ref()),
    }))
}

/// PUT /api/profile
///
/// Updates the caller's profile. When the chosen industry has no cached
/// insight yet, one is generated first and inserted in the same
/// transaction as the user update.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ProfileUpdate>,
) -> Result<Json<UserRow>, AppError> {
    if request.industry.trim().is_empty() {
        return Err(AppError::Validation("industry cannot be empty".to_string()));
    }

    let user = resolve_owner(state.store.as_ref(), &session).await?;
    let updated = update::update_profile(state.store.as_ref(), &state.gemini, &user, request).await?;

    Ok(Json(updated))
}
