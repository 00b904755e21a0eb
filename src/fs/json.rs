//! JSON file operations with schema validation

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::validate_profile;
use crate::errors::{AssessaError, Result};
use crate::schemas::{CandidateProfile, SessionSnapshot};
use crate::wizard::WizardScript;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AssessaError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            AssessaError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        AssessaError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Write a value as pretty JSON.
///
/// Writes to a temp file next to `path` and renames it into place, so
/// readers never see a partial file.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| AssessaError::InvalidJson(e.to_string()))?;
    write_atomic(path, &content)
}

/// Write a rendered document, with the same atomic rename as `write_json`
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content)
}

pub fn read_script(path: &Path) -> Result<WizardScript> {
    read_json(path)
}

fn check_profile(path: &Path, profile: &CandidateProfile) -> Result<()> {
    validate_profile(profile).map_err(|e| {
        AssessaError::InvalidJson(format!("Inconsistent profile in {}: {}", path.display(), e))
    })
}

/// Read a profile, refusing one no session could have produced
pub fn read_profile(path: &Path) -> Result<CandidateProfile> {
    let profile: CandidateProfile = read_json(path)?;
    check_profile(path, &profile)?;
    Ok(profile)
}

/// Read a snapshot, with the same profile checks as `read_profile`
pub fn read_snapshot(path: &Path) -> Result<SessionSnapshot> {
    let snapshot: SessionSnapshot = read_json(path)?;
    check_profile(path, &snapshot.profile)?;
    Ok(snapshot)
}
