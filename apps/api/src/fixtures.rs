//! Seed records for the dashboard pages, embedded at compile time.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::interview::Interview;
use crate::models::job::{Application, Job};
use crate::models::resume::ResumeVersion;
use crate::models::skill::Skill;

const JOBS_JSON: &str = include_str!("../fixtures/jobs.json");
const APPLICATIONS_JSON: &str = include_str!("../fixtures/applications.json");
const INTERVIEWS_JSON: &str = include_str!("../fixtures/interviews.json");
const RESUMES_JSON: &str = include_str!("../fixtures/resumes.json");
const SKILLS_JSON: &str = include_str!("../fixtures/skills.json");

/// Read-only fixture collections. Never mutated after startup.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub applications: Vec<Application>,
    pub interviews: Vec<Interview>,
    pub resumes: Vec<ResumeVersion>,
    pub skills: Vec<Skill>,
}

impl Fixtures {
    pub fn load() -> Result<Self> {
        Ok(Self {
            applications: parse("applications", APPLICATIONS_JSON)?,
            interviews: parse("interviews", INTERVIEWS_JSON)?,
            resumes: parse("resumes", RESUMES_JSON)?,
            skills: parse("skills", SKILLS_JSON)?,
        })
    }
}

/// The job list served when no persisted list is configured.
pub fn default_jobs() -> Result<Vec<Job>> {
    parse("jobs", JOBS_JSON)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).with_context(|| format!("fixture '{name}' is not valid JSON"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_parse() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.applications.len(), 8);
        assert_eq!(fixtures.interviews.len(), 5);
        assert_eq!(fixtures.resumes.len(), 3);
        assert_eq!(fixtures.skills.len(), 7);
    }

    #[test]
    fn test_default_jobs_have_unique_ids() {
        let jobs = default_jobs().unwrap();
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }
}
