//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::errors::{AssessaError, Result};
use crate::fs;
use crate::schemas::Config;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "assessa.json";

fn resolve(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            candidate.exists().then_some(candidate)
        }
    }
}

fn load_from(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let Some(path) = resolve(explicit, cwd) else {
        tracing::debug!("no config file, using defaults");
        return Ok(Config::default());
    };

    let config: Config = fs::read_json(&path).map_err(|e| match e {
        AssessaError::InvalidJson(message) => AssessaError::ConfigError(message),
        other => other,
    })?;

    if config.evaluation.stages.is_empty() {
        return Err(AssessaError::ConfigError(format!(
            "{}: evaluation.stages must not be empty",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load configuration, falling back to defaults.
///
/// An explicit path must exist. Without one, `./assessa.json` is used when
/// present; otherwise every field takes its default.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    load_from(explicit, &cwd)
}
