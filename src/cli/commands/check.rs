//! Check command - Gate decisions for a saved profile

use std::path::Path;

use serde::Serialize;

use crate::domain::{can_enter, is_completed, WIZARD_STEPS};
use crate::errors::{AssessaError, Result};
use crate::fs::read_profile;
use crate::schemas::{CandidateProfile, StepId};

/// One row of the check output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: StepId,
    pub title: String,
    pub allowed: bool,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Gate decision and completion for every step
pub fn step_reports(profile: &CandidateProfile) -> Vec<StepReport> {
    WIZARD_STEPS
        .iter()
        .map(|&step| {
            let decision = can_enter(step, profile);
            StepReport {
                step,
                title: step.title().to_string(),
                allowed: decision.allowed,
                completed: is_completed(step, profile),
                reason: decision.reason,
            }
        })
        .collect()
}

/// Print which steps `profile` may open
pub async fn run(profile: &Path, json: bool) -> Result<()> {
    let profile = read_profile(profile)?;
    let reports = step_reports(&profile);

    if json {
        let rendered = serde_json::to_string_pretty(&reports)
            .map_err(|e| AssessaError::wrap(e, "Cannot serialize output"))?;
        println!("{}", rendered);
        return Ok(());
    }

    for report in &reports {
        let status = if !report.allowed {
            "locked"
        } else if report.completed {
            "completed"
        } else {
            "open"
        };
        match report.reason {
            Some(ref reason) => println!("{:<24} {:<10} {}", report.title, status, reason),
            None => println!("{:<24} {}", report.title, status),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::FileRef;

    #[test]
    fn test_reports_for_partial_uploads() {
        let profile = CandidateProfile::new()
            .with_identity("Ana", "ana@x.co")
            .with_upload(0, FileRef::new("q1.mp4", 1024, "video/mp4"));
        let reports = step_reports(&profile);

        assert_eq!(reports.len(), 4);
        assert!(reports[0].allowed && reports[0].completed);
        assert!(reports[1].allowed && !reports[1].completed);
        assert!(!reports[2].allowed);
        assert!(reports[2].reason.as_deref().unwrap().contains('1'));
        assert!(!reports[3].allowed);
    }
}
