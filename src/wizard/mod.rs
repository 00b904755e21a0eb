//! Wizard session, renderer payload and scripted replay

pub mod events;
pub mod replay;
pub mod session;
pub mod view;


pub use events::{EventOutcome, OutcomeStatus, WizardEvent, WizardScript};
pub use replay::{apply_event, replay_script, ReplayEvent, ReplayOptions};
pub use session::{EvaluationTicket, WizardSession};
pub use view::{ResultPayload, StepView, UploadView, WizardView, ANONYMOUS_CANDIDATE};
