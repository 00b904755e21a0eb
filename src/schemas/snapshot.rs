//! Session snapshot - what `assessa run --output` writes to disk

use serde::{Deserialize, Serialize};

use super::profile::CandidateProfile;
use super::step::StepId;

/// Frozen view of a wizard session at the end of a replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Active step when the snapshot was taken
    pub current_step: StepId,

    /// Progress bar percentage
    pub progress: u8,

    /// The candidate profile
    pub profile: CandidateProfile,

    /// ISO 8601 timestamp when the snapshot was taken
    pub generated_at: String,
}

impl SessionSnapshot {
    pub fn new(current_step: StepId, progress: u8, profile: CandidateProfile) -> Self {
        SessionSnapshot {
            schema_version: 1,
            current_step,
            progress,
            profile,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_round_trip() {
        let profile = CandidateProfile::new().with_identity("Ana", "ana@x.co");
        let snapshot = SessionSnapshot::new(StepId::Upload, 50, profile);

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshot);
        assert!(json.contains("\"current_step\": \"upload\""));
    }
}
