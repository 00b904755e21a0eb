//! Result documents: the certificate and the full report

mod template;

pub use template::{load_template, render_template, DocumentVariables};

use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::schemas::CandidateProfile;

/// Which document to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Certificate of completion, only for a passed result
    Certificate,
    /// Score, verdict, breakdown and submitted videos
    Report,
}

impl DocumentKind {
    /// File name of the template for this kind
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::Certificate => "certificate.txt",
            DocumentKind::Report => "report.md",
        }
    }
}

/// Render `kind` for `profile`.
///
/// # Errors
/// * `NotEvaluated` - The profile has no committed score
/// * `CertificateUnavailable` - A certificate was asked for a failed result
pub fn render_document(
    kind: DocumentKind,
    profile: &CandidateProfile,
    issued_on: NaiveDate,
    template_dir: Option<&Path>,
) -> Result<String> {
    if !profile.is_evaluated() {
        return Err(ValidationError::NotEvaluated.into());
    }
    if kind == DocumentKind::Certificate && !profile.passed {
        return Err(ValidationError::CertificateUnavailable.into());
    }

    let template = load_template(kind, template_dir)?;
    let variables = DocumentVariables::from_profile(profile, issued_on);
    tracing::debug!(kind = ?kind, name = %profile.name, "rendering document");

    Ok(render_template(&template, &variables))
}
