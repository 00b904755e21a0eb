//! Scripted wizard events

use serde::{Deserialize, Serialize};

use crate::errors::AssessaError;
use crate::schemas::{FileRef, StepId};

/// One user action, as recorded in a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// Identity form submitted
    SubmitIdentity { name: String, email: String },
    /// File picked for a slot (0-based)
    SelectFile { slot: usize, file: FileRef },
    /// Videos submitted (confirmed), which runs the evaluation
    SubmitVideos,
    /// Sidebar click
    Navigate { step: StepId },
    /// Start-over button (confirmed)
    Reset,
}

impl WizardEvent {
    /// Short label for logs and outcome listings
    pub fn label(&self) -> String {
        match self {
            WizardEvent::SubmitIdentity { name, .. } => format!("submit_identity {}", name),
            WizardEvent::SelectFile { slot, file } => {
                format!("select_file slot {} ({})", slot, file.name)
            }
            WizardEvent::SubmitVideos => "submit_videos".to_string(),
            WizardEvent::Navigate { step } => format!("navigate {}", step),
            WizardEvent::Reset => "reset".to_string(),
        }
    }
}

/// A recorded session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WizardScript {
    #[serde(default)]
    pub events: Vec<WizardEvent>,
}

/// Whether an event took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Applied,
    Rejected,
}

/// Result of replaying one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Position in the script
    pub index: usize,
    pub event: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Active step after the event
    pub step: StepId,
    pub progress: u8,
}

impl EventOutcome {
    pub fn applied(index: usize, event: &WizardEvent, step: StepId, progress: u8) -> Self {
        EventOutcome {
            index,
            event: event.label(),
            status: OutcomeStatus::Applied,
            code: None,
            message: None,
            step,
            progress,
        }
    }

    pub fn rejected(
        index: usize,
        event: &WizardEvent,
        error: &AssessaError,
        step: StepId,
        progress: u8,
    ) -> Self {
        EventOutcome {
            index,
            event: event.label(),
            status: OutcomeStatus::Rejected,
            code: Some(error.code().to_string()),
            message: Some(error.to_string()),
            step,
            progress,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status == OutcomeStatus::Applied
    }
}
