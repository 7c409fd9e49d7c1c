//! Axum route handlers for the alumni directory.
//!
//! The directory is public: browsing requires no session, matching the
//! original product behavior.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::alumni::query;
use crate::errors::AppError;
use crate::models::alumni::{AlumniFilter, AlumniFilterOptions, AlumnusRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AlumniListResponse {
    pub total: usize,
    pub alumni: Vec<AlumnusRow>,
}

/// GET /api/alumni
///
/// Filtered directory search, ordered by name. With no company filter,
/// rows with placeholder companies are hidden.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(filter): Query<AlumniFilter>,
) -> Result<Json<AlumniListResponse>, AppError> {
    let filter = query::normalize(filter);
    let alumni = state.store.search_alumni(&filter).await?;

    Ok(Json(AlumniListResponse {
        total: alumni.len(),
        alumni,
    }))
}

/// GET /api/alumni/filters
///
/// Distinct graduation years (newest first) and companies (alphabetical)
/// for populating the directory's filter dropdowns.
pub async fn handle_filter_options(
    State(state): State<AppState>,
) -> Result<Json<AlumniFilterOptions>, AppError> {
    let options = state.store.alumni_filter_options().await?;
    Ok(Json(options))
}
