//! Step gate: which wizard section may be opened for a given profile
//!
//! Every rule re-checks all upstream prerequisites, first failure wins, so
//! a candidate who skips ahead gets the most relevant single reason.

use crate::errors::GateRejection;
use crate::schemas::{CandidateProfile, StepId, UPLOAD_SLOTS};

/// Reason shown while name or email is missing
pub const REASON_IDENTITY: &str = "complete identity first";

/// Reason shown while no video has been uploaded
pub const REASON_NO_UPLOADS: &str = "upload videos first";

/// Reason shown while the score is still the zero sentinel
pub const REASON_NOT_EVALUATED: &str = "evaluation still in progress";

/// Outcome of a gate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether the step may be opened
    pub allowed: bool,

    /// Reason for refusal (if allowed is false)
    pub reason: Option<String>,
}

impl GateDecision {
    /// Create an allowing decision
    pub fn allow() -> Self {
        GateDecision {
            allowed: true,
            reason: None,
        }
    }

    /// Create a refusing decision
    pub fn deny(reason: impl Into<String>) -> Self {
        GateDecision {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Convert into a navigation result for `step`
    pub fn into_result(self, step: StepId) -> Result<StepId, GateRejection> {
        if self.allowed {
            return Ok(step);
        }
        Err(GateRejection {
            step,
            reason: self.reason.unwrap_or_default(),
        })
    }
}

fn require_identity(profile: &CandidateProfile) -> Option<GateDecision> {
    if !profile.has_identity() {
        return Some(GateDecision::deny(REASON_IDENTITY));
    }
    None
}

fn require_any_upload(profile: &CandidateProfile) -> Option<GateDecision> {
    if profile.uploaded_count() == 0 {
        return Some(GateDecision::deny(REASON_NO_UPLOADS));
    }
    None
}

/// Validate opening the upload step
pub fn can_enter_upload(profile: &CandidateProfile) -> GateDecision {
    require_identity(profile).unwrap_or_else(GateDecision::allow)
}

/// Validate opening the evaluation step
pub fn can_enter_evaluation(profile: &CandidateProfile) -> GateDecision {
    if let Some(denied) = require_identity(profile).or_else(|| require_any_upload(profile)) {
        return denied;
    }
    let uploaded = profile.uploaded_count();
    if uploaded < UPLOAD_SLOTS {
        return GateDecision::deny(format!(
            "{} of {} uploaded, please complete the rest",
            uploaded, UPLOAD_SLOTS
        ));
    }
    GateDecision::allow()
}

/// Validate opening the result step
pub fn can_enter_result(profile: &CandidateProfile) -> GateDecision {
    if let Some(denied) = require_identity(profile).or_else(|| require_any_upload(profile)) {
        return denied;
    }
    if !profile.is_evaluated() {
        return GateDecision::deny(REASON_NOT_EVALUATED);
    }
    GateDecision::allow()
}

/// Decide whether `step` may be opened for `profile`
pub fn can_enter(step: StepId, profile: &CandidateProfile) -> GateDecision {
    match step {
        StepId::Identity => GateDecision::allow(),
        StepId::Upload => can_enter_upload(profile),
        StepId::Evaluation => can_enter_evaluation(profile),
        StepId::Result => can_enter_result(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Evaluation, FileRef, ScoreBreakdown};

    fn video(n: usize) -> FileRef {
        FileRef::new(format!("q{}.mp4", n + 1), 1024, "video/mp4")
    }

    fn identified() -> CandidateProfile {
        CandidateProfile::new().with_identity("Ana", "ana@x.co")
    }

    fn with_uploads(profile: CandidateProfile, count: usize) -> CandidateProfile {
        (0..count).fold(profile, |p, i| p.with_upload(i, video(i)))
    }

    fn scored(profile: CandidateProfile, score: u32) -> CandidateProfile {
        let breakdown = ScoreBreakdown {
            communication: 90,
            confidence: 85,
            relevance: 80,
        };
        profile.with_evaluation(&Evaluation::new(score, breakdown))
    }

    #[test]
    fn test_identity_always_allowed() {
        assert!(can_enter(StepId::Identity, &CandidateProfile::new()).allowed);
        assert!(can_enter(StepId::Identity, &scored(with_uploads(identified(), 3), 80)).allowed);
    }

    #[test]
    fn test_upload_requires_identity() {
        let decision = can_enter(StepId::Upload, &CandidateProfile::new());
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some(REASON_IDENTITY));

        let name_only = CandidateProfile::new().with_identity("Ana", "");
        assert!(!can_enter(StepId::Upload, &name_only).allowed);

        assert!(can_enter(StepId::Upload, &identified()).allowed);
    }

    #[test]
    fn test_evaluation_checks_identity_before_uploads() {
        // Uploads present but identity missing: identity reason wins
        let profile = with_uploads(CandidateProfile::new(), 3);
        let decision = can_enter(StepId::Evaluation, &profile);
        assert_eq!(decision.reason.as_deref(), Some(REASON_IDENTITY));
    }

    #[test]
    fn test_evaluation_without_uploads() {
        let decision = can_enter(StepId::Evaluation, &identified());
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some(REASON_NO_UPLOADS));
    }

    #[test]
    fn test_evaluation_reports_partial_count() {
        let decision = can_enter(StepId::Evaluation, &with_uploads(identified(), 2));
        assert!(!decision.allowed);
        assert_eq!(
            decision.reason.as_deref(),
            Some("2 of 3 uploaded, please complete the rest")
        );

        let decision = can_enter(StepId::Evaluation, &with_uploads(identified(), 1));
        assert!(decision.reason.unwrap().contains('1'));
    }

    #[test]
    fn test_evaluation_allowed_with_all_uploads() {
        assert!(can_enter(StepId::Evaluation, &with_uploads(identified(), 3)).allowed);
    }

    #[test]
    fn test_result_requires_score() {
        let profile = with_uploads(identified(), 3);
        let decision = can_enter(StepId::Result, &profile);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some(REASON_NOT_EVALUATED));

        assert!(can_enter(StepId::Result, &scored(profile, 65)).allowed);
    }

    #[test]
    fn test_result_reason_order() {
        assert_eq!(
            can_enter(StepId::Result, &CandidateProfile::new()).reason.as_deref(),
            Some(REASON_IDENTITY)
        );
        assert_eq!(
            can_enter(StepId::Result, &identified()).reason.as_deref(),
            Some(REASON_NO_UPLOADS)
        );
        // One upload is enough to get past the upload check for result
        assert_eq!(
            can_enter(StepId::Result, &with_uploads(identified(), 1)).reason.as_deref(),
            Some(REASON_NOT_EVALUATED)
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(GateDecision::allow().into_result(StepId::Upload), Ok(StepId::Upload));

        let err = GateDecision::deny("nope").into_result(StepId::Result).unwrap_err();
        assert_eq!(err.step, StepId::Result);
        assert_eq!(err.reason, "nope");
    }
}
