use serde::Serialize;

use crate::dashboard::stats::{average_of, breakdown, max_of, percentage, Breakdown};
use crate::models::interview::{Interview, InterviewKind, InterviewStatus};
use crate::models::job::{Application, ApplicationStatus};
use crate::models::resume::ResumeVersion;
use crate::models::skill::{Relevance, Skill, SkillCategory};

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSummary {
    pub by_status: Breakdown<ApplicationStatus>,
    /// Applications not yet rejected.
    pub active: usize,
    /// Share of applications that moved past `applied`.
    pub response_rate: Option<u32>,
    pub average_match_score: Option<f64>,
    pub best_match_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewSummary {
    pub by_status: Breakdown<InterviewStatus>,
    pub by_kind: Breakdown<InterviewKind>,
    pub upcoming: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    pub total: usize,
    pub best_version: Option<String>,
    pub best_match_score: Option<f64>,
    pub average_match_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillSummary {
    pub by_category: Breakdown<SkillCategory>,
    pub by_relevance: Breakdown<Relevance>,
    /// Skills whose current level is below target.
    pub gaps: usize,
    pub average_gap: Option<f64>,
}

pub fn summarize_applications(applications: &[Application]) -> ApplicationSummary {
    let by_status = breakdown(applications, |a| a.status);
    let responded = applications
        .iter()
        .filter(|a| a.status.has_response())
        .count();

    ApplicationSummary {
        active: by_status.total - by_status.count(ApplicationStatus::Rejected),
        response_rate: percentage(responded, applications.len()),
        average_match_score: average_of(applications, |a| a.match_score as f64).map(round1),
        best_match_score: max_of(applications, |a| a.match_score as f64),
        by_status,
    }
}

pub fn summarize_interviews(interviews: &[Interview]) -> InterviewSummary {
    let by_status = breakdown(interviews, |i| i.status);
    InterviewSummary {
        upcoming: by_status.count(InterviewStatus::Scheduled),
        by_kind: breakdown(interviews, |i| i.kind),
        by_status,
    }
}

pub fn summarize_resumes(resumes: &[ResumeVersion]) -> ResumeSummary {
    // First version wins on ties, matching display order.
    let best = resumes.iter().fold(None::<&ResumeVersion>, |best, r| match best {
        Some(b) if b.match_score >= r.match_score => Some(b),
        _ => Some(r),
    });

    ResumeSummary {
        total: resumes.len(),
        best_version: best.map(|r| r.name.clone()),
        best_match_score: max_of(resumes, |r| r.match_score as f64),
        average_match_score: average_of(resumes, |r| r.match_score as f64).map(round1),
    }
}

pub fn summarize_skills(skills: &[Skill]) -> SkillSummary {
    let gaps: Vec<&Skill> = skills.iter().filter(|s| s.gap() > 0).collect();

    SkillSummary {
        by_category: breakdown(skills, |s| s.category),
        by_relevance: breakdown(skills, |s| s.relevance),
        gaps: gaps.len(),
        average_gap: average_of(&gaps, |s| s.gap() as f64).map(round1),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_application_summary_from_fixtures() {
        let fixtures = Fixtures::load().unwrap();
        let summary = summarize_applications(&fixtures.applications);

        assert_eq!(summary.by_status.total, 8);
        assert_eq!(summary.by_status.count(ApplicationStatus::Applied), 2);
        assert_eq!(summary.by_status.count(ApplicationStatus::Rejected), 2);
        assert_eq!(summary.active, 6);
        // 6 of 8 moved past "applied"
        assert_eq!(summary.response_rate, Some(75));
        assert_eq!(summary.best_match_score, Some(92.0));
        // (92+78+64+88+71+83+86+59) / 8 = 77.625
        assert_eq!(summary.average_match_score, Some(77.6));
    }

    #[test]
    fn test_empty_applications_have_no_rates() {
        let summary = summarize_applications(&[]);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.response_rate, None);
        assert_eq!(summary.average_match_score, None);
        assert_eq!(summary.best_match_score, None);
    }

    #[test]
    fn test_interview_summary_counts_upcoming() {
        let fixtures = Fixtures::load().unwrap();
        let summary = summarize_interviews(&fixtures.interviews);
        assert_eq!(summary.upcoming, 2);
        assert_eq!(summary.by_kind.count(InterviewKind::Technical), 1);
        assert_eq!(summary.by_status.count(InterviewStatus::Cancelled), 1);
    }

    #[test]
    fn test_resume_summary_picks_best_version() {
        let fixtures = Fixtures::load().unwrap();
        let summary = summarize_resumes(&fixtures.resumes);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.best_version.as_deref(), Some("Frontend - React focus"));
        assert_eq!(summary.best_match_score, Some(92.0));
        // (92 + 81 + 74) / 3 = 82.33
        assert_eq!(summary.average_match_score, Some(82.3));
    }

    #[test]
    fn test_skill_summary_ignores_met_targets() {
        let fixtures = Fixtures::load().unwrap();
        let summary = summarize_skills(&fixtures.skills);
        // Stakeholder Communication already meets its target
        assert_eq!(summary.gaps, 6);
        // (5 + 10 + 25 + 30 + 10 + 25) / 6 = 17.5
        assert_eq!(summary.average_gap, Some(17.5));
        assert_eq!(summary.by_category.count(SkillCategory::Technical), 4);
        assert_eq!(summary.by_relevance.count(Relevance::High), 3);
    }
}
