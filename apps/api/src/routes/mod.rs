pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::alumni::handlers as alumni_handlers;
use crate::cover_letter::handlers as cover_letter_handlers;
use crate::insights::handlers as insights_handlers;
use crate::interview::handlers as interview_handlers;
use crate::profile::handlers as profile_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile & onboarding
        .route(
            "/api/profile/onboarding",
            get(profile_handlers::handle_onboarding_status),
        )
        .route("/api/profile", put(profile_handlers::handle_update_profile))
        // Industry insights
        .route("/api/insights", get(insights_handlers::handle_get_insights))
        // Cover letters
        .route(
            "/api/cover-letters",
            post(cover_letter_handlers::handle_generate).get(cover_letter_handlers::handle_list),
        )
        .route(
            "/api/cover-letters/:id",
            get(cover_letter_handlers::handle_get)
                .put(cover_letter_handlers::handle_update)
                .delete(cover_letter_handlers::handle_delete),
        )
        .route(
            "/api/cover-letters/:id/regenerate",
            post(cover_letter_handlers::handle_regenerate),
        )
        // Resume
        .route(
            "/api/resume",
            post(resume_handlers::handle_save).get(resume_handlers::handle_get),
        )
        .route("/api/resume/improve", post(resume_handlers::handle_improve))
        .route(
            "/api/resume/improve-batch",
            post(resume_handlers::handle_improve_batch),
        )
        .route("/api/resume/summary", post(resume_handlers::handle_summary))
        // Interview prep
        .route(
            "/api/interview/quiz",
            post(interview_handlers::handle_generate_quiz),
        )
        .route(
            "/api/interview/results",
            post(interview_handlers::handle_save_result),
        )
        .route(
            "/api/interview/assessments",
            get(interview_handlers::handle_list_assessments),
        )
        // Alumni directory (public, no session required)
        .route("/api/alumni", get(alumni_handlers::handle_search))
        .route(
            "/api/alumni/filters",
            get(alumni_handlers::handle_filter_options),
        )
        .with_state(state)
}
