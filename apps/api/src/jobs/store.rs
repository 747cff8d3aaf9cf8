use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::fixtures::default_jobs;
use crate::models::job::Job;

/// Loads the persisted job list once at startup.
///
/// Falls back to the fixture list when no path is configured, the file is
/// unreadable, or its content is not a JSON array of jobs. Only a broken
/// fixture is an error.
pub async fn load_job_list(path: Option<&Path>) -> Result<Vec<Job>> {
    let Some(path) = path else {
        info!("No job list configured, using fixture jobs");
        return default_jobs();
    };

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not read job list {}: {e}; using fixture jobs", path.display());
            return default_jobs();
        }
    };

    match serde_json::from_str::<Vec<Job>>(&raw) {
        Ok(jobs) => {
            info!("Loaded {} jobs from {}", jobs.len(), path.display());
            Ok(jobs)
        }
        Err(e) => {
            warn!("Job list {} is not valid: {e}; using fixture jobs", path.display());
            default_jobs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_unset_path_uses_fixtures() {
        let jobs = load_job_list(None).await.unwrap();
        assert_eq!(jobs, default_jobs().unwrap());
    }

    #[tokio::test]
    async fn test_reads_persisted_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"saved-1","title":"SRE","company":"Ops Inc","location":"Remote","job_type":"contract","posted":"2026-10-01"}}]"#
        )
        .unwrap();

        let jobs = load_job_list(Some(file.path())).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "saved-1");
    }

    #[tokio::test]
    async fn test_corrupt_list_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let jobs = load_job_list(Some(file.path())).await.unwrap();
        assert_eq!(jobs, default_jobs().unwrap());
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let jobs = load_job_list(Some(&dir.path().join("jobList.json")))
            .await
            .unwrap();
        assert_eq!(jobs, default_jobs().unwrap());
    }
}
