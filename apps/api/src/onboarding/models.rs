use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::onboarding::resume::ResumeSource;

/// Wizard position. Serialized as its 1-based number.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "u8")]
pub enum Step {
    BasicInfo = 1,
    CareerProfile = 2,
    ResumeUpload = 3,
    JobPreferences = 4,
    Complete = 5,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::BasicInfo => Some(Step::CareerProfile),
            Step::CareerProfile => Some(Step::ResumeUpload),
            Step::ResumeUpload => Some(Step::JobPreferences),
            Step::JobPreferences => Some(Step::Complete),
            Step::Complete => None,
        }
    }

    /// The step "Back" leads to. Unavailable on the first and the terminal step.
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::BasicInfo | Step::Complete => None,
            Step::CareerProfile => Some(Step::BasicInfo),
            Step::ResumeUpload => Some(Step::CareerProfile),
            Step::JobPreferences => Some(Step::ResumeUpload),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::CareerProfile => "Career Profile",
            Step::ResumeUpload => "Resume Upload",
            Step::JobPreferences => "Job Preferences",
            Step::Complete => "Complete",
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> u8 {
        step.number()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareerStage {
    ActiveJobSeeker,
    CareerDeveloper,
    CareerChanger,
    RecentGraduate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    Remote,
    Hybrid,
    OnSite,
    Flexible,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserData {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CareerProfile {
    pub career_stage: Option<CareerStage>,
    pub industries: BTreeSet<String>,
    pub roles: BTreeSet<String>,
    pub location_preference: Option<LocationPreference>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OnboardingState {
    pub step: Step,
    pub user_data: UserData,
    pub career_profile: CareerProfile,
    pub resume_uploaded: bool,
    pub resume_source: Option<ResumeSource>,
    /// Set once the auth collaborator has created or signed in the account.
    pub account_id: Option<Uuid>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: Step::BasicInfo,
            user_data: UserData::default(),
            career_profile: CareerProfile::default(),
            resume_uploaded: false,
            resume_source: None,
            account_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_serializes_as_number() {
        assert_eq!(serde_json::to_value(Step::ResumeUpload).unwrap(), 3);
    }

    #[test]
    fn test_next_and_previous_are_unit_steps() {
        let mut step = Step::BasicInfo;
        while let Some(next) = step.next() {
            assert_eq!(next.number(), step.number() + 1);
            step = next;
        }
        assert_eq!(step, Step::Complete);
        assert_eq!(Step::BasicInfo.previous(), None);
        assert_eq!(Step::Complete.previous(), None);
        assert_eq!(Step::JobPreferences.previous(), Some(Step::ResumeUpload));
    }

    #[test]
    fn test_password_never_serialized() {
        let mut state = OnboardingState::default();
        state.user_data.password = "hunter22".to_string();
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("hunter22"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_location_wire_names() {
        assert_eq!(
            serde_json::to_value(LocationPreference::OnSite).unwrap(),
            "on_site"
        );
        let stage: CareerStage = serde_json::from_str("\"recent_graduate\"").unwrap();
        assert_eq!(stage, CareerStage::RecentGraduate);
    }
}
