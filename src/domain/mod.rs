//! Domain logic for the wizard: step order, gate, badges, intake

mod gate;
mod identity;
mod integrity;
mod navigation;
mod status;
mod steps;
mod upload;


pub use gate::{
    can_enter, can_enter_evaluation, can_enter_result, can_enter_upload, GateDecision,
    REASON_IDENTITY, REASON_NOT_EVALUATED, REASON_NO_UPLOADS,
};
pub use identity::{is_valid_email, submit_identity};
pub use integrity::validate_profile;
pub use navigation::navigate;
pub use status::{classify_step, is_completed, step_badges, StepBadge};
pub use steps::{get_next_step, get_step_index, is_final_step, WIZARD_STEPS};
pub use upload::{accept_upload, validate_video};
