//! Template loading and rendering for result documents
//!
//! Supports {{variable}} substitution and {{#if var}}...{{/if}} conditionals.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{AssessaError, Result};
use crate::schemas::{format_file_size, CandidateProfile};

use super::DocumentKind;

// Bundled default templates
const DEFAULT_CERTIFICATE: &str = include_str!("../../templates/certificate.txt");
const DEFAULT_REPORT: &str = include_str!("../../templates/report.md");

static IF_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{#if\s+(\w+)\}\}([\s\S]*?)\{\{/if\}\}").expect("if pattern is valid")
});
static IFNOT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{#ifnot\s+(\w+)\}\}([\s\S]*?)\{\{/ifnot\}\}").expect("ifnot pattern is valid")
});
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("variable pattern is valid"));

/// Variables available to document templates
#[derive(Debug, Clone, Default)]
pub struct DocumentVariables {
    pub name: String,
    pub email: String,
    pub score: u32,
    pub passed: bool,

    /// Issue date, formatted as YYYY-MM-DD
    pub issued_on: String,

    /// One "- Label: n/100" line per category, if recorded
    pub breakdown: Option<Vec<String>>,

    /// One line per uploaded video
    pub uploads: Vec<String>,
}

impl DocumentVariables {
    pub fn from_profile(profile: &CandidateProfile, issued_on: NaiveDate) -> Self {
        let breakdown = profile.breakdown.map(|b| {
            b.categories()
                .iter()
                .map(|(label, value)| format!("- {}: {}/100", label, value))
                .collect()
        });

        let uploads = profile
            .uploads
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(file) => format!(
                    "- Question {}: {} ({})",
                    index + 1,
                    file.name,
                    format_file_size(file.size)
                ),
                None => format!("- Question {}: not uploaded", index + 1),
            })
            .collect();

        DocumentVariables {
            name: profile.name.clone(),
            email: profile.email.clone(),
            score: profile.score,
            passed: profile.passed,
            issued_on: issued_on.format("%Y-%m-%d").to_string(),
            breakdown,
            uploads,
        }
    }

    /// Convert to a hashmap of string values for template rendering.
    ///
    /// `passed` maps to an empty string when false so `{{#if passed}}` works.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("name".to_string(), self.name.clone());
        map.insert("email".to_string(), self.email.clone());
        map.insert("score".to_string(), self.score.to_string());
        map.insert("issued_on".to_string(), self.issued_on.clone());
        map.insert("uploads".to_string(), self.uploads.join("\n"));
        map.insert(
            "verdict".to_string(),
            if self.passed { "PASSED" } else { "NOT PASSED" }.to_string(),
        );
        if self.passed {
            map.insert("passed".to_string(), "true".to_string());
        }
        if let Some(ref lines) = self.breakdown {
            map.insert("breakdown".to_string(), lines.join("\n"));
        }

        map
    }
}

/// Load a document template, checking `custom_dir` first.
///
/// Falls back to the bundled template when the directory is absent or does
/// not hold a file with the kind's name.
pub fn load_template(kind: DocumentKind, custom_dir: Option<&Path>) -> Result<String> {
    if let Some(dir) = custom_dir {
        let custom_path = dir.join(kind.file_name());
        if custom_path.exists() {
            return std::fs::read_to_string(&custom_path).map_err(|e| {
                AssessaError::FileNotFound(format!(
                    "Cannot read template {}: {}",
                    custom_path.display(),
                    e
                ))
            });
        }
    }

    Ok(match kind {
        DocumentKind::Certificate => DEFAULT_CERTIFICATE.to_string(),
        DocumentKind::Report => DEFAULT_REPORT.to_string(),
    })
}

/// Render a template with variable substitution.
///
/// Supports:
/// - `{{variable}}` - Simple variable substitution
/// - `{{#if variable}}...{{/if}}` - Included if variable is non-empty
/// - `{{#ifnot variable}}...{{/ifnot}}` - Included if variable is empty or missing
pub fn render_template(template: &str, variables: &DocumentVariables) -> String {
    let vars = variables.to_map();
    let is_set = |name: &str| vars.get(name).is_some_and(|v| !v.is_empty());

    let result = IF_BLOCK
        .replace_all(template, |caps: &regex::Captures| {
            if is_set(&caps[1]) {
                caps[2].to_string()
            } else {
                String::new()
            }
        })
        .to_string();

    let result = IFNOT_BLOCK
        .replace_all(&result, |caps: &regex::Captures| {
            if is_set(&caps[1]) {
                String::new()
            } else {
                caps[2].to_string()
            }
        })
        .to_string();

    VARIABLE
        .replace_all(&result, |caps: &regex::Captures| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .to_string()
}
