use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{BadgeTone, Category};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterviewKind {
    Phone,
    Technical,
    Behavioral,
    Onsite,
    Final,
}

impl Category for InterviewKind {
    const ALL: &'static [Self] = &[
        InterviewKind::Phone,
        InterviewKind::Technical,
        InterviewKind::Behavioral,
        InterviewKind::Onsite,
        InterviewKind::Final,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl Category for InterviewStatus {
    const ALL: &'static [Self] = &[
        InterviewStatus::Scheduled,
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
    ];

    fn badge(self) -> BadgeTone {
        match self {
            InterviewStatus::Scheduled => BadgeTone::Info,
            InterviewStatus::Completed => BadgeTone::Success,
            InterviewStatus::Cancelled => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub company: String,
    pub position: String,
    pub kind: InterviewKind,
    pub scheduled_for: NaiveDateTime,
    pub status: InterviewStatus,
}
