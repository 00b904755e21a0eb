//! Candidate profile - everything the wizard collects about one candidate

use serde::{Deserialize, Serialize};

use super::evaluation::{Evaluation, ScoreBreakdown};
use super::file_ref::FileRef;

/// Number of interview questions, one video each
pub const UPLOAD_SLOTS: usize = 3;

/// In-memory state of one assessment session.
///
/// `score == 0` means "not evaluated yet"; `passed` only carries meaning
/// once the score is positive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Candidate full name
    #[serde(default)]
    pub name: String,

    /// Candidate email
    #[serde(default)]
    pub email: String,

    /// One optional video per question; slot `i` answers question `i + 1`
    #[serde(default)]
    pub uploads: [Option<FileRef>; UPLOAD_SLOTS],

    /// Overall score, 0 until an evaluation is committed
    #[serde(default)]
    pub score: u32,

    /// Derived from `score` at commit time
    #[serde(default)]
    pub passed: bool,

    /// Category scores committed together with `score`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl CandidateProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new profile with the given identity
    pub fn with_identity(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = email.into();
        self
    }

    /// Return a new profile with `file` in slot `index`.
    ///
    /// Out-of-range indexes leave the profile as it was; validation lives in
    /// `domain::accept_upload`.
    pub fn with_upload(mut self, index: usize, file: FileRef) -> Self {
        if let Some(slot) = self.uploads.get_mut(index) {
            *slot = Some(file);
        }
        self
    }

    /// Return a new profile carrying the committed evaluation
    pub fn with_evaluation(mut self, evaluation: &Evaluation) -> Self {
        self.score = evaluation.score;
        self.passed = evaluation.passed();
        self.breakdown = Some(evaluation.breakdown);
        self
    }

    // ===== QUERIES =====

    /// Both identity fields are filled in
    pub fn has_identity(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Number of populated upload slots
    pub fn uploaded_count(&self) -> usize {
        self.uploads.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every question has a video
    pub fn all_uploaded(&self) -> bool {
        self.uploaded_count() == UPLOAD_SLOTS
    }

    /// A score has been committed
    pub fn is_evaluated(&self) -> bool {
        self.score > 0
    }
}
