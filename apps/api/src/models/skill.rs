use serde::{Deserialize, Serialize};

use super::{BadgeTone, Category};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl Category for SkillCategory {
    const ALL: &'static [Self] = &[
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Domain,
    ];
}

/// How much a skill matters for the user's target roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Category for Relevance {
    const ALL: &'static [Self] = &[Relevance::High, Relevance::Medium, Relevance::Low];

    fn badge(self) -> BadgeTone {
        match self {
            Relevance::High => BadgeTone::Danger,
            Relevance::Medium => BadgeTone::Warning,
            Relevance::Low => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub relevance: Relevance,
    pub current_level: u8, // 0 – 100
    pub target_level: u8,  // 0 – 100
}

impl Skill {
    /// Points still missing to reach the target level. Zero when met.
    pub fn gap(&self) -> u8 {
        self.target_level.saturating_sub(self.current_level)
    }
}
