//! Error types for the assessment wizard
//!
//! Domain errors (`ValidationError`, `UploadError`, `GateRejection`) are
//! reported synchronously to the event that caused them. `AssessaError`
//! wraps them together with the IO/config failures of the CLI, and each
//! variant has a stable code for programmatic handling.

use thiserror::Error;

use crate::schemas::StepId;

/// Result type alias for assessa operations
pub type Result<T> = std::result::Result<T, AssessaError>;

/// Invalid or incomplete user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required identity field was empty after trimming
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email does not look like local@domain.tld
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Videos were submitted before every slot was filled
    #[error("{uploaded} of 3 videos uploaded, all answers are required")]
    IncompleteUploads { uploaded: usize },

    /// Videos were submitted while an evaluation is still running
    #[error("an evaluation is already in progress")]
    EvaluationInFlight,

    /// A result document was requested before any score was committed
    #[error("candidate has not been evaluated yet")]
    NotEvaluated,

    /// The certificate is only issued for a passing result
    #[error("certificate is only available for a passing result")]
    CertificateUnavailable,

    /// A stored score is neither the zero sentinel nor a committable score
    #[error("score {0} is outside 60..=100")]
    ScoreOutOfRange(u32),

    /// A stored `passed` flag disagrees with its score
    #[error("passed is {passed}, which does not match score {score}")]
    PassedMismatch { score: u32, passed: bool },

    /// A stored upload slot holds a file intake would refuse
    #[error("upload slot {slot}: {reason}")]
    InvalidUpload { slot: usize, reason: String },
}

/// Rejected video upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// MIME type is not one of mp4, mov, avi or quicktime
    #[error("unsupported video format '{mime_type}', use MP4, MOV or AVI")]
    UnsupportedType { mime_type: String },

    /// File exceeds the 100 MiB limit
    #[error("file is too large ({size} bytes), maximum is {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// Slot index outside 0..3
    #[error("upload slot {0} does not exist, expected 0, 1 or 2")]
    SlotOutOfRange(usize),
}

impl UploadError {
    /// Short kind name, used in replay outcomes
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::UnsupportedType { .. } => "UnsupportedType",
            UploadError::FileTooLarge { .. } => "FileTooLarge",
            UploadError::SlotOutOfRange(_) => "SlotOutOfRange",
        }
    }
}

/// Navigation blocked by the step gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot open {step}: {reason}")]
pub struct GateRejection {
    /// The step that was requested
    pub step: StepId,

    /// Single-sentence reason, surfaced to the user verbatim
    pub reason: String,
}

/// Main error type for all assessa operations
#[derive(Debug, Error)]
pub enum AssessaError {
    /// Identity or submission input failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Upload intake rejected a file
    #[error("Upload rejected: {0}")]
    Upload(#[from] UploadError),

    /// Step gate refused a navigation
    #[error("Navigation blocked: {0}")]
    Gate(#[from] GateRejection),

    /// Evaluator produced an unusable result
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Evaluation was cancelled or its session was reset
    #[error("Evaluation cancelled")]
    Cancelled,

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Operation was interrupted (e.g., by SIGINT)
    #[error("Operation interrupted")]
    Interrupted,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl AssessaError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            AssessaError::Validation(_) => "VALIDATION",
            AssessaError::Upload(_) => "UPLOAD_REJECTED",
            AssessaError::Gate(_) => "GATE_REJECTED",
            AssessaError::Evaluation(_) => "EVALUATION_ERROR",
            AssessaError::Cancelled => "CANCELLED",
            AssessaError::InvalidJson(_) => "INVALID_JSON",
            AssessaError::FileNotFound(_) => "FILE_NOT_FOUND",
            AssessaError::ConfigError(_) => "CONFIG_ERROR",
            AssessaError::Interrupted => "INTERRUPTED",
            AssessaError::Io(_) => "IO_ERROR",
            AssessaError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether the user can correct their input and retry in the same session
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AssessaError::Validation(_)
                | AssessaError::Upload(_)
                | AssessaError::Gate(_)
                | AssessaError::Evaluation(_)
                | AssessaError::Cancelled
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        AssessaError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &AssessaError) -> i32 {
    match error {
        AssessaError::Interrupted => 130, // Standard Unix exit code for SIGINT
        _ => 1,
    }
}
