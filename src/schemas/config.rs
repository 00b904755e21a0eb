//! Config schema - Configuration for assessa

use serde::{Deserialize, Serialize};

/// Staged evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Delay before each stage is marked active, in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Delay between the last stage and the result commit, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Stage labels shown while the evaluation runs
    #[serde(default = "default_stages")]
    pub stages: Vec<String>,

    /// Seed for the random evaluator; unseeded runs draw from the OS rng
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_interval_ms() -> u64 {
    1500
}

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_stages() -> Vec<String> {
    vec![
        "Uploading answers".to_string(),
        "Transcribing speech".to_string(),
        "Analysing answers".to_string(),
        "Compiling scores".to_string(),
    ]
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            tick_interval_ms: default_tick_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            stages: default_stages(),
            seed: None,
        }
    }
}

impl EvaluationConfig {
    /// Same stages with every delay removed
    pub fn instant(mut self) -> Self {
        self.tick_interval_ms = 0;
        self.settle_delay_ms = 0;
        self
    }
}

/// Main configuration for assessa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Evaluation timing and randomness
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            evaluation: EvaluationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.evaluation.tick_interval_ms, 1500);
        assert_eq!(config.evaluation.settle_delay_ms, 1000);
        assert_eq!(config.evaluation.stages.len(), 4);
        assert!(config.evaluation.seed.is_none());
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"evaluation": {"seed": 7, "tick_interval_ms": 10}}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.schema_version, 1);
        assert_eq!(parsed.evaluation.seed, Some(7));
        assert_eq!(parsed.evaluation.tick_interval_ms, 10);
        // Other fields should have defaults
        assert_eq!(parsed.evaluation.settle_delay_ms, 1000);
        assert_eq!(parsed.evaluation.stages.len(), 4);
    }

    #[test]
    fn test_empty_json_is_default() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_instant_keeps_stages() {
        let config = EvaluationConfig::default().instant();
        assert_eq!(config.tick_interval_ms, 0);
        assert_eq!(config.settle_delay_ms, 0);
        assert_eq!(config.stages, default_stages());
    }
}
