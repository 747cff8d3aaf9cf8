use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tailored resume variant. `match_score` is fixture data, never computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeVersion {
    pub id: String,
    pub name: String,
    pub target_role: String,
    pub match_score: u8, // 0 – 100
    pub updated_on: NaiveDate,
}
