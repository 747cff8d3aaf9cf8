//! Axum route handlers for the dashboard pages.

use axum::{extract::State, Json};

use crate::dashboard::summary::{
    summarize_applications, summarize_interviews, summarize_resumes, summarize_skills,
    ApplicationSummary, InterviewSummary, ResumeSummary, SkillSummary,
};
use crate::state::AppState;

/// GET /api/v1/dashboard/applications
pub async fn handle_application_summary(
    State(state): State<AppState>,
) -> Json<ApplicationSummary> {
    Json(summarize_applications(&state.fixtures.applications))
}

/// GET /api/v1/dashboard/interviews
pub async fn handle_interview_summary(State(state): State<AppState>) -> Json<InterviewSummary> {
    Json(summarize_interviews(&state.fixtures.interviews))
}

/// GET /api/v1/dashboard/resumes
pub async fn handle_resume_summary(State(state): State<AppState>) -> Json<ResumeSummary> {
    Json(summarize_resumes(&state.fixtures.resumes))
}

/// GET /api/v1/dashboard/skills
pub async fn handle_skill_summary(State(state): State<AppState>) -> Json<SkillSummary> {
    Json(summarize_skills(&state.fixtures.skills))
}
