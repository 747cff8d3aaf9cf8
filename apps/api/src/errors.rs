use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::jobs::deck::DeckError;
use crate::onboarding::flow::OnboardingError;
use crate::onboarding::machine::TransitionError;
use crate::onboarding::resume::UploadError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// The auth collaborator refused the request. The message is shown inline.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::MissingField(_) | TransitionError::TermsNotAccepted => {
                AppError::Validation(err.to_string())
            }
            _ => AppError::InvalidTransition(err.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Rejected(msg) => AppError::AuthFailed(msg),
            AuthError::InvalidCredentials => AppError::Unauthorized,
            AuthError::Backend(msg) => AppError::Upstream(msg),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::UnsupportedType(_) => AppError::UnsupportedMediaType(err.to_string()),
            UploadError::Empty | UploadError::MissingFile => AppError::Validation(err.to_string()),
        }
    }
}

impl From<OnboardingError> for AppError {
    fn from(err: OnboardingError) -> Self {
        match err {
            OnboardingError::Transition(e) => e.into(),
            OnboardingError::Auth(e) => e.into(),
            OnboardingError::Upload(e) => e.into(),
        }
    }
}

impl From<DeckError> for AppError {
    fn from(err: DeckError) -> Self {
        AppError::InvalidTransition(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid email or password".to_string(),
            ),
            AppError::AuthFailed(msg) => (StatusCode::UNAUTHORIZED, "AUTH_FAILED", msg.clone()),
            AppError::InvalidTransition(msg) => {
                (StatusCode::CONFLICT, "INVALID_TRANSITION", msg.clone())
            }
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            AppError::Upstream(msg) => {
                tracing::error!("Auth backend error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The authentication service is unavailable, please try again".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
