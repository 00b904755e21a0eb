//! Renderer payload: what the sidebar, header and sections draw from

use serde::{Deserialize, Serialize};

use crate::domain::StepBadge;
use crate::schemas::{format_file_size, CandidateProfile, FileRef, ScoreBreakdown, StepId};

/// Name shown in the header before the identity form is saved
pub const ANONYMOUS_CANDIDATE: &str = "Candidate";

/// Final result shown on the result step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub score: u32,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl ResultPayload {
    /// None while the score is still the zero sentinel
    pub fn from_profile(profile: &CandidateProfile) -> Option<Self> {
        if !profile.is_evaluated() {
            return None;
        }
        Some(ResultPayload {
            score: profile.score,
            passed: profile.passed,
            breakdown: profile.breakdown,
        })
    }

    pub fn verdict(&self) -> &'static str {
        if self.passed {
            "PASSED"
        } else {
            "NOT PASSED"
        }
    }
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    pub step: StepId,
    pub title: String,
    pub badge: StepBadge,
}

/// One question card on the upload step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadView {
    /// 1-based question number
    pub question: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

impl UploadView {
    pub fn new(index: usize, file: Option<&FileRef>) -> Self {
        UploadView {
            question: index + 1,
            file_name: file.map(|f| f.name.clone()),
            file_size: file.map(|f| format_file_size(f.size)),
        }
    }

    pub fn is_uploaded(&self) -> bool {
        self.file_name.is_some()
    }
}

/// Full render state of the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardView {
    pub current_step: StepId,
    /// Page title of the active step
    pub title: String,
    pub progress: u8,
    /// Empty until the identity form is saved
    pub candidate_name: String,
    pub steps: Vec<StepView>,
    pub uploads: Vec<UploadView>,
    pub next_step: Option<StepId>,
    pub evaluating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultPayload>,
}

impl WizardView {
    /// Header name, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        if self.candidate_name.is_empty() {
            ANONYMOUS_CANDIDATE
        } else {
            &self.candidate_name
        }
    }

    /// Badge of one step
    pub fn badge(&self, step: StepId) -> Option<StepBadge> {
        self.steps.iter().find(|s| s.step == step).map(|s| s.badge)
    }
}
