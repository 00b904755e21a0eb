//! Evaluator seam and the staged evaluation runner
//!
//! The core only depends on the `Evaluator` trait. `RandomEvaluator` is the
//! stand-in scoring service; `FixedEvaluator` hands back a preset result.

mod cancel;
mod random;
mod runner;

pub use cancel::CancellationToken;
pub use random::RandomEvaluator;
pub use runner::{run_staged_evaluation, StageCallback, StagedOptions};

use crate::schemas::{CandidateProfile, Evaluation};

/// Scores a candidate. Each call may return a different result.
pub trait Evaluator: Send {
    fn evaluate(&mut self, profile: &CandidateProfile) -> Evaluation;
}

/// Returns the same evaluation every time
#[derive(Debug, Clone)]
pub struct FixedEvaluator {
    evaluation: Evaluation,
}

impl FixedEvaluator {
    pub fn new(evaluation: Evaluation) -> Self {
        FixedEvaluator { evaluation }
    }
}

impl Evaluator for FixedEvaluator {
    fn evaluate(&mut self, _profile: &CandidateProfile) -> Evaluation {
        self.evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::ScoreBreakdown;

    #[test]
    fn test_fixed_evaluator_repeats() {
        let evaluation = Evaluation::new(
            82,
            ScoreBreakdown {
                communication: 88,
                confidence: 79,
                relevance: 84,
            },
        );
        let mut evaluator = FixedEvaluator::new(evaluation);
        let profile = CandidateProfile::new();

        assert_eq!(evaluator.evaluate(&profile), evaluation);
        assert_eq!(evaluator.evaluate(&profile), evaluation);
    }
}
