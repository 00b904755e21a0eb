//! Schema types for assessa
//!
//! Every type that crosses a boundary (scripts, snapshots, config, the
//! renderer) is plain serde data.

mod config;
mod evaluation;
mod file_ref;
mod profile;
mod snapshot;
mod step;

pub use config::{Config, EvaluationConfig};
pub use evaluation::{is_passing, Evaluation, ScoreBreakdown, MAX_SCORE, MIN_SCORE, PASS_THRESHOLD};
pub use file_ref::{format_file_size, FileRef, VideoFormat, MAX_UPLOAD_BYTES};
pub use profile::{CandidateProfile, UPLOAD_SLOTS};
pub use snapshot::SessionSnapshot;
pub use step::StepId;
