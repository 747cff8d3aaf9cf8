//! Axum route handlers for the onboarding wizard.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::IdentityProvider;
use crate::errors::AppError;
use crate::onboarding::flow;
use crate::onboarding::machine::{self, view, Action, BasicInfoPatch, StepView};
use crate::onboarding::models::OnboardingState;
use crate::onboarding::resume::{ResumeUpload, UploadError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProviderRequest {
    pub provider: IdentityProvider,
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: StepView,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub redirect: &'static str,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Onboarding session {id} not found"))
}

async fn snapshot(state: &AppState, id: Uuid) -> Result<OnboardingState, AppError> {
    state
        .onboarding
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

/// Applies a sign-in computed off-lock to the session as it is now, provided
/// it is still on step 1. `with_form` also stores the submitted form.
async fn commit_sign_in(
    state: &AppState,
    id: Uuid,
    signed_in: OnboardingState,
    with_form: bool,
) -> Result<Json<OnboardingResponse>, AppError> {
    let form = with_form.then_some(&signed_in.user_data);
    let step_view = state
        .onboarding
        .update(id, |current| {
            *current = machine::carry_sign_in(current, &signed_in, form)?;
            Ok::<_, AppError>(view(current))
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(OnboardingResponse {
        session_id: id,
        view: step_view,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/onboarding
pub async fn handle_start(State(state): State<AppState>) -> (StatusCode, Json<OnboardingResponse>) {
    let initial = OnboardingState::default();
    let step_view = view(&initial);
    let session_id = state.onboarding.insert(initial).await;
    tracing::info!(%session_id, "Onboarding started");

    (
        StatusCode::CREATED,
        Json(OnboardingResponse {
            session_id,
            view: step_view,
        }),
    )
}

/// GET /api/v1/onboarding/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let current = snapshot(&state, id).await?;
    Ok(Json(OnboardingResponse {
        session_id: id,
        view: view(&current),
    }))
}

/// DELETE /api/v1/onboarding/:id
///
/// The user navigated away; the draft is discarded.
pub async fn handle_abandon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .onboarding
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    tracing::info!(session_id = %id, "Onboarding abandoned");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/onboarding/:id/basic-info
///
/// Merges the form, then asks the auth collaborator to create the account.
/// On failure the session keeps its previous state.
pub async fn handle_submit_basic_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<BasicInfoPatch>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let current = snapshot(&state, id).await?;
    let draft = machine::apply(&current, Action::UpdateBasicInfo(patch))?;
    let next = flow::submit_basic_info(state.auth.as_ref(), &draft).await?;
    commit_sign_in(&state, id, next, true).await
}

/// POST /api/v1/onboarding/:id/provider
pub async fn handle_provider_sign_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProviderRequest>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let current = snapshot(&state, id).await?;
    let next = flow::sign_in_with_provider(state.auth.as_ref(), &current, req.provider).await?;
    commit_sign_in(&state, id, next, false).await
}

/// POST /api/v1/onboarding/:id/actions
pub async fn handle_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<Action>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let step_view = state
        .onboarding
        .update(id, |current| {
            *current = machine::apply(current, action)?;
            Ok::<_, AppError>(view(current))
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(OnboardingResponse {
        session_id: id,
        view: step_view,
    }))
}

/// POST /api/v1/onboarding/:id/resume
///
/// Multipart form with a `file` field. Only PDF and DOCX are accepted.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<OnboardingResponse>, AppError> {
    let upload = read_resume_field(multipart).await?;
    tracing::debug!(
        session_id = %id,
        file_name = %upload.file_name,
        content_type = %upload.content_type,
        size = upload.data.len(),
        "Resume received"
    );

    let step_view = state
        .onboarding
        .update(id, |current| {
            *current = flow::upload_resume(current, &upload)?;
            Ok::<_, AppError>(view(current))
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(OnboardingResponse {
        session_id: id,
        view: step_view,
    }))
}

async fn read_resume_field(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        return Ok(ResumeUpload {
            file_name,
            content_type,
            data,
        });
    }
    Err(UploadError::MissingFile.into())
}

/// POST /api/v1/onboarding/:id/complete
///
/// Only valid on the terminal step. Discards the session and returns the
/// dashboard redirect.
pub async fn handle_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompletionResponse>, AppError> {
    let current = snapshot(&state, id).await?;
    let redirect = machine::complete(&current)?;
    state.onboarding.remove(id).await;
    tracing::info!(session_id = %id, "Onboarding complete");
    Ok(Json(CompletionResponse { redirect }))
}
