use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::{Account, Credentials, IdentityProvider, SignUpData};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProviderSignInRequest {
    pub provider: IdentityProvider,
}

/// POST /api/v1/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<Account>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    let account = state.auth.sign_in(&req).await?;
    Ok(Json(account))
}

/// POST /api/v1/auth/signup
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpData>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let account = state.auth.sign_up(&req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /api/v1/auth/provider
pub async fn handle_provider_sign_in(
    State(state): State<AppState>,
    Json(req): Json<ProviderSignInRequest>,
) -> Result<Json<Account>, AppError> {
    let account = state.auth.sign_in_with_provider(req.provider).await?;
    Ok(Json(account))
}
