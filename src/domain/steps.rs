//! Wizard step ordering
//!
//! The wizard follows a fixed order:
//! identity → upload → evaluation → result

use crate::schemas::StepId;

/// The canonical ordering of wizard steps.
///
/// Badges and renderers iterate in this order.
pub const WIZARD_STEPS: &[StepId] = &[
    StepId::Identity,
    StepId::Upload,
    StepId::Evaluation,
    StepId::Result,
];

/// Get the 0-based position of a step in the wizard.
pub fn get_step_index(step: StepId) -> usize {
    WIZARD_STEPS
        .iter()
        .position(|&s| s == step)
        .unwrap_or(usize::MAX)
}

/// Returns the step after `current`, or None for the result step.
pub fn get_next_step(current: StepId) -> Option<StepId> {
    let index = get_step_index(current);
    if index >= WIZARD_STEPS.len() - 1 {
        return None;
    }
    Some(WIZARD_STEPS[index + 1])
}

/// Check if a step is the last one (result).
pub fn is_final_step(step: StepId) -> bool {
    step == StepId::Result
}
