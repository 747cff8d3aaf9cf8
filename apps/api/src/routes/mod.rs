pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::dashboard::handlers as dashboard;
use crate::jobs::handlers as jobs;
use crate::onboarding::handlers as onboarding;
use crate::state::AppState;

const RESUME_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signin", post(auth::handle_sign_in))
        .route("/api/v1/auth/signup", post(auth::handle_sign_up))
        .route("/api/v1/auth/provider", post(auth::handle_provider_sign_in))
        // Onboarding wizard
        .route("/api/v1/onboarding", post(onboarding::handle_start))
        .route(
            "/api/v1/onboarding/:id",
            get(onboarding::handle_get).delete(onboarding::handle_abandon),
        )
        .route(
            "/api/v1/onboarding/:id/basic-info",
            post(onboarding::handle_submit_basic_info),
        )
        .route(
            "/api/v1/onboarding/:id/provider",
            post(onboarding::handle_provider_sign_in),
        )
        .route(
            "/api/v1/onboarding/:id/actions",
            post(onboarding::handle_action),
        )
        .route(
            "/api/v1/onboarding/:id/resume",
            post(onboarding::handle_upload_resume)
                .layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT)),
        )
        .route(
            "/api/v1/onboarding/:id/complete",
            post(onboarding::handle_complete),
        )
        // Jobs and browse deck
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/deck", post(jobs::handle_create_deck))
        .route(
            "/api/v1/deck/:id",
            get(jobs::handle_get_deck).delete(jobs::handle_delete_deck),
        )
        .route("/api/v1/deck/:id/drag", post(jobs::handle_drag))
        .route("/api/v1/deck/:id/decision", post(jobs::handle_decision))
        .route("/api/v1/deck/:id/reset", post(jobs::handle_reset_deck))
        // Dashboard statistics
        .route(
            "/api/v1/dashboard/applications",
            get(dashboard::handle_application_summary),
        )
        .route(
            "/api/v1/dashboard/interviews",
            get(dashboard::handle_interview_summary),
        )
        .route(
            "/api/v1/dashboard/resumes",
            get(dashboard::handle_resume_summary),
        )
        .route(
            "/api/v1/dashboard/skills",
            get(dashboard::handle_skill_summary),
        )
        .with_state(state)
}
