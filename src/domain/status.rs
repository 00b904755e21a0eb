//! Step badges for the sidebar: locked, active, completed or available

use serde::{Deserialize, Serialize};

use crate::schemas::{CandidateProfile, StepId};

use super::gate::can_enter;
use super::steps::WIZARD_STEPS;

/// Badge drawn next to a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepBadge {
    /// The gate refuses this step
    Locked,
    /// The step currently shown
    Active,
    /// Reachable and its work is done
    Completed,
    /// Reachable, nothing done yet
    Available,
}

impl std::fmt::Display for StepBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepBadge::Locked => write!(f, "locked"),
            StepBadge::Active => write!(f, "active"),
            StepBadge::Completed => write!(f, "completed"),
            StepBadge::Available => write!(f, "available"),
        }
    }
}

/// Whether the work of `step` is done
pub fn is_completed(step: StepId, profile: &CandidateProfile) -> bool {
    match step {
        StepId::Identity => profile.has_identity(),
        StepId::Upload => profile.all_uploaded(),
        StepId::Evaluation | StepId::Result => profile.is_evaluated(),
    }
}

/// Badge for one step. Locked wins over everything, then active.
pub fn classify_step(step: StepId, active: StepId, profile: &CandidateProfile) -> StepBadge {
    if !can_enter(step, profile).allowed {
        return StepBadge::Locked;
    }
    if step == active {
        return StepBadge::Active;
    }
    if is_completed(step, profile) {
        return StepBadge::Completed;
    }
    StepBadge::Available
}

/// Badges for every step, in wizard order
pub fn step_badges(active: StepId, profile: &CandidateProfile) -> Vec<(StepId, StepBadge)> {
    WIZARD_STEPS
        .iter()
        .map(|&step| (step, classify_step(step, active, profile)))
        .collect()
}
