//! Onboarding transitions as pure functions `(state, action) -> state`.
//!
//! Every transition validates against the current step and returns a new
//! state; on error the caller keeps the old one. `step` only moves by one,
//! except `provider_signed_in`, which lands on step 2 from step 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::auth::SignUpData;
use crate::onboarding::models::{
    CareerStage, LocationPreference, OnboardingState, Step, UserData,
};
use crate::onboarding::resume::ResumeSource;

pub const COMPLETION_REDIRECT: &str = "/dashboard";

#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("Onboarding is already complete")]
    Terminal,

    #[error("'{action}' is not available on {step}")]
    WrongStep { action: &'static str, step: Step },

    #[error("Back is not available on {0}")]
    BackUnavailable(Step),

    #[error("Continue is disabled: {0}")]
    ContinueBlocked(&'static str),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("You must agree to the terms to continue")]
    TermsNotAccepted,

    #[error("Onboarding is not finished yet ({0})")]
    NotComplete(Step),
}

/// Partial edit of the basic-info form. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub agree_to_terms: Option<bool>,
}

/// Client-driven wizard actions. Account creation, provider sign-in and file
/// uploads go through their own transitions since they need a collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    UpdateBasicInfo(BasicInfoPatch),
    SelectCareerStage { stage: CareerStage },
    ImportFromLinkedin,
    ToggleIndustry { industry: String },
    ToggleRole { role: String },
    SetLocation { preference: LocationPreference },
    Continue,
    Back,
    Skip,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::UpdateBasicInfo(_) => "update_basic_info",
            Action::SelectCareerStage { .. } => "select_career_stage",
            Action::ImportFromLinkedin => "import_from_linkedin",
            Action::ToggleIndustry { .. } => "toggle_industry",
            Action::ToggleRole { .. } => "toggle_role",
            Action::SetLocation { .. } => "set_location",
            Action::Continue => "continue",
            Action::Back => "back",
            Action::Skip => "skip",
        }
    }
}

/// What the current step offers. Mirrors the enabled/disabled buttons.
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub step: Step,
    pub title: &'static str,
    pub can_go_back: bool,
    pub can_continue: bool,
    /// Step 1 only: the form is ready for account creation.
    pub can_submit: bool,
    pub can_skip: bool,
    pub is_complete: bool,
    pub state: OnboardingState,
}

pub fn view(state: &OnboardingState) -> StepView {
    StepView {
        step: state.step,
        title: state.step.title(),
        can_go_back: state.step.previous().is_some(),
        can_continue: continue_blocker(state).is_none(),
        can_submit: state.step == Step::BasicInfo && basic_info_problem(state).is_none(),
        can_skip: state.step == Step::ResumeUpload,
        is_complete: state.step == Step::Complete,
        state: state.clone(),
    }
}

/// Why "Continue" is disabled on the current step, if it is.
pub fn continue_blocker(state: &OnboardingState) -> Option<&'static str> {
    match state.step {
        Step::BasicInfo => Some("create an account or sign in with a provider"),
        Step::CareerProfile if state.career_profile.career_stage.is_none() => {
            Some("select a career stage")
        }
        Step::JobPreferences
            if state.career_profile.industries.is_empty()
                && state.career_profile.roles.is_empty() =>
        {
            Some("select at least one industry or role")
        }
        Step::Complete => Some("onboarding is complete"),
        _ => None,
    }
}

fn basic_info_problem(state: &OnboardingState) -> Option<TransitionError> {
    let user = &state.user_data;
    if user.full_name.trim().is_empty() {
        Some(TransitionError::MissingField("full name"))
    } else if user.email.trim().is_empty() {
        Some(TransitionError::MissingField("email"))
    } else if user.password.is_empty() {
        Some(TransitionError::MissingField("password"))
    } else if !user.agree_to_terms {
        Some(TransitionError::TermsNotAccepted)
    } else {
        None
    }
}

pub fn require_step(
    state: &OnboardingState,
    expected: Step,
    action: &'static str,
) -> Result<(), TransitionError> {
    if state.step == Step::Complete {
        return Err(TransitionError::Terminal);
    }
    if state.step != expected {
        return Err(TransitionError::WrongStep {
            action,
            step: state.step,
        });
    }
    Ok(())
}

fn move_to(state: &mut OnboardingState, to: Step) {
    debug!(from = state.step.number(), to = to.number(), "Onboarding step changed");
    state.step = to;
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

pub fn apply(state: &OnboardingState, action: Action) -> Result<OnboardingState, TransitionError> {
    if state.step == Step::Complete {
        return Err(TransitionError::Terminal);
    }

    let name = action.name();
    let mut next = state.clone();
    match action {
        Action::UpdateBasicInfo(patch) => {
            require_step(state, Step::BasicInfo, name)?;
            let user = &mut next.user_data;
            if let Some(full_name) = patch.full_name {
                user.full_name = full_name;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(password) = patch.password {
                user.password = password;
            }
            if let Some(agree) = patch.agree_to_terms {
                user.agree_to_terms = agree;
            }
        }
        Action::SelectCareerStage { stage } => {
            require_step(state, Step::CareerProfile, name)?;
            next.career_profile.career_stage = Some(stage);
        }
        Action::ImportFromLinkedin => {
            require_step(state, Step::ResumeUpload, name)?;
            next = attach_resume(state, ResumeSource::Linkedin)?;
        }
        Action::ToggleIndustry { industry } => {
            require_step(state, Step::JobPreferences, name)?;
            toggle(&mut next.career_profile.industries, industry);
        }
        Action::ToggleRole { role } => {
            require_step(state, Step::JobPreferences, name)?;
            toggle(&mut next.career_profile.roles, role);
        }
        Action::SetLocation { preference } => {
            require_step(state, Step::JobPreferences, name)?;
            next.career_profile.location_preference = Some(preference);
        }
        Action::Continue => {
            if state.step == Step::BasicInfo {
                // Step 1 only advances through account creation.
                return Err(TransitionError::WrongStep {
                    action: name,
                    step: state.step,
                });
            }
            if let Some(reason) = continue_blocker(state) {
                return Err(TransitionError::ContinueBlocked(reason));
            }
            let to = state.step.next().ok_or(TransitionError::Terminal)?;
            move_to(&mut next, to);
        }
        Action::Back => {
            let to = state
                .step
                .previous()
                .ok_or(TransitionError::BackUnavailable(state.step))?;
            move_to(&mut next, to);
        }
        Action::Skip => {
            require_step(state, Step::ResumeUpload, name)?;
            move_to(&mut next, Step::JobPreferences);
        }
    }
    Ok(next)
}

/// Validates step 1 and builds the payload for the sign-up collaborator.
pub fn sign_up_request(state: &OnboardingState) -> Result<SignUpData, TransitionError> {
    require_step(state, Step::BasicInfo, "submit_basic_info")?;
    if let Some(problem) = basic_info_problem(state) {
        return Err(problem);
    }
    Ok(SignUpData {
        full_name: state.user_data.full_name.trim().to_string(),
        email: state.user_data.email.trim().to_string(),
        password: state.user_data.password.clone(),
    })
}

/// Step 1 → 2 after the collaborator created the account.
pub fn account_created(
    state: &OnboardingState,
    account_id: Uuid,
) -> Result<OnboardingState, TransitionError> {
    require_step(state, Step::BasicInfo, "submit_basic_info")?;
    if let Some(problem) = basic_info_problem(state) {
        return Err(problem);
    }
    let mut next = state.clone();
    next.account_id = Some(account_id);
    move_to(&mut next, Step::CareerProfile);
    Ok(next)
}

/// Provider shortcut: always lands on step 2, skipping the basic-info form.
pub fn provider_signed_in(
    state: &OnboardingState,
    account_id: Uuid,
) -> Result<OnboardingState, TransitionError> {
    require_step(state, Step::BasicInfo, "provider_sign_in")?;
    let mut next = state.clone();
    next.account_id = Some(account_id);
    move_to(&mut next, Step::CareerProfile);
    Ok(next)
}

/// Carries a sign-in computed from an earlier snapshot onto `current`.
///
/// Only `step` and `account_id` come from `signed_in`, plus the submitted
/// form when one is given. Everything else keeps its current value.
pub fn carry_sign_in(
    current: &OnboardingState,
    signed_in: &OnboardingState,
    form: Option<&UserData>,
) -> Result<OnboardingState, TransitionError> {
    require_step(current, Step::BasicInfo, "sign_in")?;
    let mut next = current.clone();
    if let Some(form) = form {
        next.user_data = form.clone();
    }
    next.account_id = signed_in.account_id;
    next.step = signed_in.step;
    Ok(next)
}

/// Marks a resume as on file. Stays on step 3.
pub fn attach_resume(
    state: &OnboardingState,
    source: ResumeSource,
) -> Result<OnboardingState, TransitionError> {
    require_step(state, Step::ResumeUpload, "attach_resume")?;
    let mut next = state.clone();
    next.resume_uploaded = true;
    next.resume_source = Some(source);
    Ok(next)
}

/// Terminal action of step 5. Returns where the client goes next.
pub fn complete(state: &OnboardingState) -> Result<&'static str, TransitionError> {
    if state.step != Step::Complete {
        return Err(TransitionError::NotComplete(state.step));
    }
    Ok(COMPLETION_REDIRECT)
}
