//! Random stand-in for a scoring service

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::schemas::{CandidateProfile, Evaluation, ScoreBreakdown};

use super::Evaluator;

const SCORE_RANGE: RangeInclusive<u32> = 60..=99;
const COMMUNICATION_RANGE: RangeInclusive<u32> = 80..=99;
const CONFIDENCE_RANGE: RangeInclusive<u32> = 75..=94;
const RELEVANCE_RANGE: RangeInclusive<u32> = 70..=89;

/// Draws the overall score and each category uniformly.
///
/// Category scores are drawn independently of the overall score.
#[derive(Debug, Clone)]
pub struct RandomEvaluator<R: Rng = StdRng> {
    rng: R,
}

impl RandomEvaluator<StdRng> {
    /// Reproducible evaluator
    pub fn seeded(seed: u64) -> Self {
        RandomEvaluator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Evaluator seeded from the OS
    pub fn from_os_rng() -> Self {
        RandomEvaluator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is configured, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomEvaluator<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomEvaluator { rng }
    }
}

impl<R: Rng + Send> Evaluator for RandomEvaluator<R> {
    fn evaluate(&mut self, _profile: &CandidateProfile) -> Evaluation {
        let score = self.rng.random_range(SCORE_RANGE);
        let breakdown = ScoreBreakdown {
            communication: self.rng.random_range(COMMUNICATION_RANGE),
            confidence: self.rng.random_range(CONFIDENCE_RANGE),
            relevance: self.rng.random_range(RELEVANCE_RANGE),
        };
        Evaluation::new(score, breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_in_ranges() {
        let mut evaluator = RandomEvaluator::seeded(42);
        let profile = CandidateProfile::new();

        for _ in 0..500 {
            let evaluation = evaluator.evaluate(&profile);
            assert!(evaluation.in_range());
            assert!(SCORE_RANGE.contains(&evaluation.score));
            assert!(COMMUNICATION_RANGE.contains(&evaluation.breakdown.communication));
            assert!(CONFIDENCE_RANGE.contains(&evaluation.breakdown.confidence));
            assert!(RELEVANCE_RANGE.contains(&evaluation.breakdown.relevance));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let profile = CandidateProfile::new();
        let mut a = RandomEvaluator::seeded(7);
        let mut b = RandomEvaluator::seeded(7);

        for _ in 0..10 {
            assert_eq!(a.evaluate(&profile), b.evaluate(&profile));
        }
    }

    #[test]
    fn test_score_is_never_the_sentinel() {
        let mut evaluator = RandomEvaluator::from_seed_option(None);
        let evaluation = evaluator.evaluate(&CandidateProfile::new());
        assert!(evaluation.score > 0);
    }
}
