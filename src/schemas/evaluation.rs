//! Evaluation outcome schema

use serde::{Deserialize, Serialize};

/// Lowest score an evaluator may commit
pub const MIN_SCORE: u32 = 60;

/// Highest score an evaluator may commit
pub const MAX_SCORE: u32 = 100;

/// Scores at or above this pass
pub const PASS_THRESHOLD: u32 = 70;

/// Whether a committed score is a pass
pub fn is_passing(score: u32) -> bool {
    score >= PASS_THRESHOLD
}

/// Per-category scores, each out of 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub communication: u32,
    pub confidence: u32,
    pub relevance: u32,
}

impl ScoreBreakdown {
    /// Labelled categories in display order
    pub fn categories(&self) -> [(&'static str, u32); 3] {
        [
            ("Communication", self.communication),
            ("Confidence", self.confidence),
            ("Answer Relevance", self.relevance),
        ]
    }
}

/// What an evaluator hands back for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl Evaluation {
    pub fn new(score: u32, breakdown: ScoreBreakdown) -> Self {
        Evaluation { score, breakdown }
    }

    /// Whether the score lies in the committable range
    pub fn in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }

    pub fn passed(&self) -> bool {
        is_passing(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            communication: 85,
            confidence: 80,
            relevance: 75,
        }
    }

    #[test]
    fn test_pass_boundary() {
        assert!(is_passing(70));
        assert!(!is_passing(69));
        assert!(is_passing(100));
    }

    #[test]
    fn test_in_range() {
        assert!(Evaluation::new(60, breakdown()).in_range());
        assert!(Evaluation::new(100, breakdown()).in_range());
        assert!(!Evaluation::new(59, breakdown()).in_range());
        assert!(!Evaluation::new(0, breakdown()).in_range());
        assert!(!Evaluation::new(101, breakdown()).in_range());
    }

    #[test]
    fn test_categories_order() {
        let labels: Vec<&str> = breakdown().categories().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Communication", "Confidence", "Answer Relevance"]);
    }
}
