use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_STATEMENT_THRESHOLD: usize = 30;
pub const DEFAULT_PARAM_THRESHOLD: usize = 5;
pub const DEFAULT_RESULT_THRESHOLD: usize = 5;
pub const DEFAULT_IF_CHAIN_THRESHOLD: usize = 2;

/// Limits a measured value must exceed (strictly) to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub statement: usize,
    pub param: usize,
    pub result: usize,
    pub if_chain: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            statement: DEFAULT_STATEMENT_THRESHOLD,
            param: DEFAULT_PARAM_THRESHOLD,
            result: DEFAULT_RESULT_THRESHOLD,
            if_chain: DEFAULT_IF_CHAIN_THRESHOLD,
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub thresholds: Thresholds,
    pub ignore_test_files: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} threshold must not be negative (got {value})")]
    NegativeThreshold { name: &'static str, value: i64 },
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One layer of settings as written by the user (config file or command
/// line). Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum statements per function.
    pub statement_threshold: Option<i64>,
    /// Maximum parameters per function.
    pub param_threshold: Option<i64>,
    /// Maximum results per function.
    pub result_threshold: Option<i64>,
    /// Maximum number of `else` links in one if/else chain.
    pub if_chain_threshold: Option<i64>,
    /// Skip `_test.go` files.
    pub ignore_test_files: Option<bool>,
}

/// Example config JSON embedded as a constant (not in comments).
pub const EXAMPLE_CONFIG_JSON: &str = r#"{
  "statement_threshold": 40,
  "param_threshold": 4,
  "result_threshold": 3,
  "if_chain_threshold": 2,
  "ignore_test_files": true
}"#;

/// Parse a config JSON string into a [`ConfigFile`].
///
/// Missing fields stay unset; malformed JSON or unknown keys are reported
/// with the details from the underlying serde parser.
pub fn parse_config_from_text(s: &str) -> Result<ConfigFile, ConfigError> {
    Ok(serde_json::from_str::<ConfigFile>(s)?)
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config_from_text(&text)
}

impl ConfigFile {
    /// Layers `over` on top of `self`; values set in `over` win.
    pub fn merge(self, over: ConfigFile) -> ConfigFile {
        ConfigFile {
            statement_threshold: over.statement_threshold.or(self.statement_threshold),
            param_threshold: over.param_threshold.or(self.param_threshold),
            result_threshold: over.result_threshold.or(self.result_threshold),
            if_chain_threshold: over.if_chain_threshold.or(self.if_chain_threshold),
            ignore_test_files: over.ignore_test_files.or(self.ignore_test_files),
        }
    }

    /// Fills the gaps with defaults and rejects negative thresholds.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let defaults = Thresholds::default();
        Ok(Config {
            thresholds: Thresholds {
                statement: threshold("statement", self.statement_threshold, defaults.statement)?,
                param: threshold("param", self.param_threshold, defaults.param)?,
                result: threshold("result", self.result_threshold, defaults.result)?,
                if_chain: threshold("if/else chain", self.if_chain_threshold, defaults.if_chain)?,
            },
            ignore_test_files: self.ignore_test_files.unwrap_or(false),
        })
    }
}

fn threshold(name: &'static str, value: Option<i64>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v).map_err(|_| ConfigError::NegativeThreshold { name, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_json_parses() {
        let config = parse_config_from_text(EXAMPLE_CONFIG_JSON).unwrap().resolve().unwrap();
        assert_eq!(config.thresholds.statement, 40);
        assert_eq!(config.thresholds.if_chain, 2);
        assert!(config.ignore_test_files);
    }

    #[test]
    fn empty_layers_resolve_to_defaults() {
        let config = ConfigFile::default().resolve().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.thresholds.statement, 30);
        assert_eq!(config.thresholds.param, 5);
        assert_eq!(config.thresholds.result, 5);
    }

    #[test]
    fn later_layer_wins() {
        let file = parse_config_from_text(r#"{"param_threshold": 3, "result_threshold": 2}"#).unwrap();
        let cli = ConfigFile {
            param_threshold: Some(8),
            ..ConfigFile::default()
        };
        let config = file.merge(cli).resolve().unwrap();
        assert_eq!(config.thresholds.param, 8);
        assert_eq!(config.thresholds.result, 2);
        assert_eq!(config.thresholds.statement, DEFAULT_STATEMENT_THRESHOLD);
    }

    #[test]
    fn zero_is_a_legal_threshold() {
        let config = parse_config_from_text(r#"{"statement_threshold": 0}"#)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(config.thresholds.statement, 0);
    }

    #[test]
    fn negative_thresholds_are_rejected() {
        let err = parse_config_from_text(r#"{"if_chain_threshold": -1}"#)
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeThreshold { value: -1, .. }));
        assert!(err.to_string().contains("if/else chain"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config_from_text(r#"{"statements": 10}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config JSON"));
    }
}
