//! Wizard step identifiers

use serde::{Deserialize, Serialize};

/// One section of the assessment wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    /// Candidate name and email
    Identity,
    /// Three interview answer videos
    Upload,
    /// Staged AI evaluation
    Evaluation,
    /// Score, verdict and certificate
    Result,
}

impl StepId {
    /// Heading shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            StepId::Identity => "Candidate Details",
            StepId::Upload => "Interview Video Upload",
            StepId::Evaluation => "AI Evaluation",
            StepId::Result => "Evaluation Result",
        }
    }

    /// Progress bar checkpoint reached when this step is entered by the flow
    pub fn progress_checkpoint(&self) -> u8 {
        match self {
            StepId::Identity => 25,
            StepId::Upload => 50,
            StepId::Evaluation => 75,
            StepId::Result => 100,
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepId::Identity => write!(f, "identity"),
            StepId::Upload => write!(f, "upload"),
            StepId::Evaluation => write!(f, "evaluation"),
            StepId::Result => write!(f, "result"),
        }
    }
}

impl std::str::FromStr for StepId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(StepId::Identity),
            "upload" => Ok(StepId::Upload),
            "evaluation" => Ok(StepId::Evaluation),
            "result" => Ok(StepId::Result),
            _ => Err(format!("Unknown step: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_serialization() {
        assert_eq!(serde_json::to_string(&StepId::Identity).unwrap(), "\"identity\"");
        assert_eq!(serde_json::to_string(&StepId::Upload).unwrap(), "\"upload\"");
        assert_eq!(serde_json::to_string(&StepId::Evaluation).unwrap(), "\"evaluation\"");
        assert_eq!(serde_json::to_string(&StepId::Result).unwrap(), "\"result\"");
    }

    #[test]
    fn test_step_from_str() {
        assert_eq!("upload".parse::<StepId>().unwrap(), StepId::Upload);
        assert_eq!("result".parse::<StepId>().unwrap(), StepId::Result);
        assert!("hasil".parse::<StepId>().is_err());
    }

    #[test]
    fn test_progress_checkpoints() {
        assert_eq!(StepId::Identity.progress_checkpoint(), 25);
        assert_eq!(StepId::Upload.progress_checkpoint(), 50);
        assert_eq!(StepId::Evaluation.progress_checkpoint(), 75);
        assert_eq!(StepId::Result.progress_checkpoint(), 100);
    }
}
