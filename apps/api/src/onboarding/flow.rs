//! Steps that need the auth collaborator before they can transition.
//!
//! Each call validates against the given state, talks to the collaborator,
//! and returns the next state. A collaborator failure is returned as-is and
//! the caller keeps its current state; there are no retries.

use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{AuthError, Authenticator, IdentityProvider};
use crate::onboarding::machine::{self, TransitionError};
use crate::onboarding::models::{OnboardingState, Step};
use crate::onboarding::resume::{validate_upload, ResumeUpload, UploadError};

#[derive(Debug, Error, PartialEq)]
pub enum OnboardingError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Submits step 1: creates the account and moves to step 2.
pub async fn submit_basic_info(
    auth: &dyn Authenticator,
    state: &OnboardingState,
) -> Result<OnboardingState, OnboardingError> {
    let request = machine::sign_up_request(state)?;
    let account = auth.sign_up(&request).await.map_err(|e| {
        warn!("Sign-up failed during onboarding: {e}");
        e
    })?;
    info!(account_id = %account.id, "Onboarding account created");
    Ok(machine::account_created(state, account.id)?)
}

/// Provider shortcut from step 1 straight to step 2.
pub async fn sign_in_with_provider(
    auth: &dyn Authenticator,
    state: &OnboardingState,
    provider: IdentityProvider,
) -> Result<OnboardingState, OnboardingError> {
    // The collaborator is never called off step 1.
    machine::require_step(state, Step::BasicInfo, "provider_sign_in")?;
    let account = auth.sign_in_with_provider(provider).await.map_err(|e| {
        warn!(provider = provider.as_str(), "Provider sign-in failed: {e}");
        e
    })?;
    info!(account_id = %account.id, provider = provider.as_str(), "Provider sign-in succeeded");
    Ok(machine::provider_signed_in(state, account.id)?)
}

/// Checks a dropped or browsed file and records it on step 3.
pub fn upload_resume(
    state: &OnboardingState,
    upload: &ResumeUpload,
) -> Result<OnboardingState, OnboardingError> {
    let source = validate_upload(upload)?;
    Ok(machine::attach_resume(state, source)?)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::auth::{Account, Credentials, SignUpData, StubAuthenticator};
    use crate::onboarding::machine::{apply, complete, view, Action, BasicInfoPatch};
    use crate::onboarding::models::{CareerStage, LocationPreference};

    /// Collaborator that refuses everything.
    struct RejectingAuthenticator;

    #[async_trait]
    impl Authenticator for RejectingAuthenticator {
        async fn sign_in(&self, _: &Credentials) -> Result<Account, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_up(&self, _: &SignUpData) -> Result<Account, AuthError> {
            Err(AuthError::Rejected("Sign-ups are closed".to_string()))
        }

        async fn sign_in_with_provider(&self, _: IdentityProvider) -> Result<Account, AuthError> {
            Err(AuthError::Rejected("Provider unavailable".to_string()))
        }
    }

    fn basic_info() -> Action {
        Action::UpdateBasicInfo(BasicInfoPatch {
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            password: Some("correct-horse".to_string()),
            agree_to_terms: Some(true),
        })
    }

    #[tokio::test]
    async fn test_full_onboarding_scenario() {
        let auth = StubAuthenticator::new();
        let state = OnboardingState::default();
        assert_eq!(state.step, Step::BasicInfo);

        let state = apply(&state, basic_info()).unwrap();
        let state = submit_basic_info(&auth, &state).await.unwrap();
        assert_eq!(state.step, Step::CareerProfile);

        let state = apply(
            &state,
            Action::SelectCareerStage {
                stage: CareerStage::RecentGraduate,
            },
        )
        .unwrap();
        assert!(view(&state).can_continue);
        let state = apply(&state, Action::Continue).unwrap();
        assert_eq!(state.step, Step::ResumeUpload);

        let state = apply(&state, Action::Skip).unwrap();
        assert_eq!(state.step, Step::JobPreferences);
        assert!(!state.resume_uploaded);

        let state = apply(
            &state,
            Action::ToggleIndustry {
                industry: "Technology".to_string(),
            },
        )
        .unwrap();
        let state = apply(
            &state,
            Action::SetLocation {
                preference: LocationPreference::Remote,
            },
        )
        .unwrap();
        assert!(view(&state).can_continue);
        let state = apply(&state, Action::Continue).unwrap();
        assert_eq!(state.step, Step::Complete);

        assert_eq!(complete(&state), Ok("/dashboard"));
    }

    #[tokio::test]
    async fn test_sign_up_failure_keeps_state() {
        let state = apply(&OnboardingState::default(), basic_info()).unwrap();
        let err = submit_basic_info(&RejectingAuthenticator, &state)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OnboardingError::Auth(AuthError::Rejected("Sign-ups are closed".to_string()))
        );
        assert_eq!(err.to_string(), "Sign-ups are closed");
        assert_eq!(state.step, Step::BasicInfo);
    }

    #[tokio::test]
    async fn test_terms_checked_before_collaborator() {
        let state = apply(
            &OnboardingState::default(),
            Action::UpdateBasicInfo(BasicInfoPatch {
                full_name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                password: Some("correct-horse".to_string()),
                agree_to_terms: None,
            }),
        )
        .unwrap();
        // The rejecting collaborator would answer with an auth error.
        let err = submit_basic_info(&RejectingAuthenticator, &state)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OnboardingError::Transition(TransitionError::TermsNotAccepted)
        );
    }

    #[tokio::test]
    async fn test_provider_shortcut_jumps_to_step_two() {
        let auth = StubAuthenticator::new();
        let state = sign_in_with_provider(&auth, &OnboardingState::default(), IdentityProvider::Google)
            .await
            .unwrap();
        assert_eq!(state.step, Step::CareerProfile);
        assert!(state.account_id.is_some());
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_step_one() {
        let state = OnboardingState::default();
        let err = sign_in_with_provider(&RejectingAuthenticator, &state, IdentityProvider::Linkedin)
            .await
            .unwrap_err();
        assert!(matches!(err, OnboardingError::Auth(AuthError::Rejected(_))));
        assert_eq!(state.step, Step::BasicInfo);
    }

    #[test]
    fn test_upload_rejects_wrong_type_without_state_change() {
        let state = OnboardingState {
            step: Step::ResumeUpload,
            ..OnboardingState::default()
        };
        let upload = ResumeUpload {
            file_name: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            data: Bytes::from_static(b"\x89PNG"),
        };
        assert!(matches!(
            upload_resume(&state, &upload),
            Err(OnboardingError::Upload(UploadError::UnsupportedType(_)))
        ));
        assert!(!state.resume_uploaded);

        let upload = ResumeUpload {
            file_name: "cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(b"%PDF-1.7"),
        };
        let next = upload_resume(&state, &upload).unwrap();
        assert!(next.resume_uploaded);
        assert_eq!(next.step, Step::ResumeUpload);
    }
}
