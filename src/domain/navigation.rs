//! Navigation between wizard steps
//!
//! Pure function: the caller owns the active step and only replaces it on
//! `Ok`.

use crate::errors::GateRejection;
use crate::schemas::{CandidateProfile, StepId};

use super::gate::can_enter;

/// Ask the gate whether `requested` may become the active step.
///
/// Returns the requested step on success, or the gate's reason verbatim.
/// Nothing is mutated either way.
pub fn navigate(requested: StepId, profile: &CandidateProfile) -> Result<StepId, GateRejection> {
    let decision = can_enter(requested, profile);
    tracing::debug!(
        step = %requested,
        allowed = decision.allowed,
        reason = decision.reason.as_deref().unwrap_or(""),
        "gate decision"
    );
    decision.into_result(requested)
}
