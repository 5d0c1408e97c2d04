use crate::errors::ConfigError;
use crate::judge::JudgeRuntimeConfig;
use crate::report::failure::MalformedScorePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Optional `rageval.yaml`. Command-line flags override anything set here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    pub version: u32,
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub judge: JudgeSettings,
    #[serde(default)]
    pub aggregation: AggregationSettings,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            input: None,
            output_dir: None,
            judge: JudgeSettings::default(),
            aggregation: AggregationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JudgeSettings {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl JudgeSettings {
    pub fn runtime(&self) -> JudgeRuntimeConfig {
        let defaults = JudgeRuntimeConfig::default();
        JudgeRuntimeConfig {
            model: self.model.clone().unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregationSettings {
    #[serde(default)]
    pub malformed_scores: MalformedScorePolicy,
}

pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let mut cfg = parse_config(&raw)?;

    // Paths in the file are relative to the file itself.
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    cfg.input = cfg.input.map(|p| base.join(p));
    cfg.output_dir = cfg.output_dir.map(|p| base.join(p));
    Ok(cfg)
}

pub fn parse_config(raw: &str) -> Result<EvalConfig, ConfigError> {
    let cfg: EvalConfig = serde_yaml::from_str(raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &EvalConfig) -> Result<(), ConfigError> {
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }
    if let Some(t) = cfg.judge.temperature {
        if !(0.0..=2.0).contains(&t) {
            return Err(ConfigError(format!(
                "judge.temperature must be within 0.0..=2.0, got {}",
                t
            )));
        }
    }
    if cfg.judge.max_tokens == Some(0) {
        return Err(ConfigError("judge.max_tokens must be positive".into()));
    }
    Ok(())
}
