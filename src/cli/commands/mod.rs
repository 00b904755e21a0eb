//! CLI command implementations

pub mod check;
pub mod document;
pub mod run;
pub mod watch;

use crate::evaluator::{Evaluator, FixedEvaluator, RandomEvaluator};
use crate::schemas::{CandidateProfile, Evaluation, EvaluationConfig};

/// Evaluator for a replay: random by default, or a fixed overall score.
///
/// A fixed score still gets a drawn category breakdown.
pub fn build_evaluator(config: &EvaluationConfig, score: Option<u32>) -> Box<dyn Evaluator> {
    let mut random = RandomEvaluator::from_seed_option(config.seed);
    match score {
        Some(score) => {
            let drawn = random.evaluate(&CandidateProfile::new());
            Box::new(FixedEvaluator::new(Evaluation::new(score, drawn.breakdown)))
        }
        None => Box::new(random),
    }
}
