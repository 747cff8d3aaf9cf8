use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BadgeTone, Category};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

/// A job listing as shown in the browse view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub job_type: JobType,
    pub posted: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Interviewing,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// True once the employer has reacted in any way.
    pub fn has_response(self) -> bool {
        !matches!(self, ApplicationStatus::Applied)
    }
}

impl Category for ApplicationStatus {
    const ALL: &'static [Self] = &[
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    fn badge(self) -> BadgeTone {
        match self {
            ApplicationStatus::Applied => BadgeTone::Info,
            ApplicationStatus::Screening => BadgeTone::Warning,
            ApplicationStatus::Interviewing => BadgeTone::Warning,
            ApplicationStatus::Offer => BadgeTone::Success,
            ApplicationStatus::Rejected => BadgeTone::Danger,
        }
    }
}

/// A tracked application to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
    pub match_score: u8, // 0 – 100
}
