//! Assessa - Candidate assessment wizard core
//!
//! This library provides the core functionality for the assessa CLI, including:
//! - Schema definitions for profiles, uploads, evaluations and snapshots
//! - Domain logic for step gating, badges, navigation and upload intake
//! - The evaluator seam with a cancellable staged runner
//! - The wizard session and scripted replay
//! - Result documents and a terminal view of a replay

pub mod cli;
pub mod config;
pub mod documents;
pub mod domain;
pub mod errors;
pub mod evaluator;
pub mod fs;
pub mod schemas;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use errors::{AssessaError, Result};
pub use evaluator::{Evaluator, FixedEvaluator, RandomEvaluator};
pub use schemas::{CandidateProfile, Evaluation, FileRef, StepId};
pub use wizard::WizardSession;
