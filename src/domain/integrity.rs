//! Consistency check for profiles that did not come through the session

use crate::errors::ValidationError;
use crate::schemas::{is_passing, CandidateProfile, MAX_SCORE, MIN_SCORE};

use super::upload::validate_video;

/// Check the invariants a session maintains on every profile it builds.
///
/// Score is 0 or within 60..=100, `passed` matches the score, and every
/// filled slot would pass upload intake.
pub fn validate_profile(profile: &CandidateProfile) -> Result<(), ValidationError> {
    let score = profile.score;
    if score != 0 && !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange(score));
    }

    let expected = score != 0 && is_passing(score);
    if profile.passed != expected {
        return Err(ValidationError::PassedMismatch {
            score,
            passed: profile.passed,
        });
    }

    for (slot, file) in profile.uploads.iter().enumerate() {
        if let Some(file) = file {
            validate_video(file).map_err(|e| ValidationError::InvalidUpload {
                slot,
                reason: e.to_string(),
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Evaluation, FileRef, ScoreBreakdown};

    fn scored(score: u32) -> CandidateProfile {
        CandidateProfile::new()
            .with_identity("Ana", "ana@x.co")
            .with_upload(0, FileRef::new("q1.mp4", 1024, "video/mp4"))
            .with_evaluation(&Evaluation::new(
                score,
                ScoreBreakdown {
                    communication: 88,
                    confidence: 79,
                    relevance: 84,
                },
            ))
    }

    #[test]
    fn test_session_built_profiles_are_valid() {
        assert_eq!(validate_profile(&CandidateProfile::new()), Ok(()));
        assert_eq!(validate_profile(&scored(60)), Ok(()));
        assert_eq!(validate_profile(&scored(69)), Ok(()));
        assert_eq!(validate_profile(&scored(100)), Ok(()));
    }

    #[test]
    fn test_score_outside_range() {
        assert_eq!(
            validate_profile(&scored(5)),
            Err(ValidationError::ScoreOutOfRange(5))
        );
        assert_eq!(
            validate_profile(&scored(101)),
            Err(ValidationError::ScoreOutOfRange(101))
        );
    }

    #[test]
    fn test_passed_must_follow_score() {
        let mut profile = scored(65);
        profile.passed = true;
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::PassedMismatch {
                score: 65,
                passed: true
            })
        );

        let mut unscored = CandidateProfile::new();
        unscored.passed = true;
        assert!(validate_profile(&unscored).is_err());
    }

    #[test]
    fn test_stored_upload_rechecked() {
        let mut profile = scored(80);
        profile.uploads[1] = Some(FileRef::new("notes.txt", 10, "text/plain"));
        assert!(matches!(
            validate_profile(&profile),
            Err(ValidationError::InvalidUpload { slot: 1, .. })
        ));

        profile.uploads[1] = Some(FileRef::new("big.mp4", 999 * 1024 * 1024 * 1024, "video/mp4"));
        assert!(matches!(
            validate_profile(&profile),
            Err(ValidationError::InvalidUpload { slot: 1, .. })
        ));
    }
}
