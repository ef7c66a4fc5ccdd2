//! Job configuration
//!
//! One file holds the settings of every stage. Each section falls back to
//! its defaults when missing, so a config only needs the values it changes.

use std::path::Path;

use anyhow::{bail, Context};
use plotkit_optimize::{OptimizerConfig, SelectionConfig};
use plotkit_planner::PlannerConfig;
use plotkit_segment::FlattenConfig;
use serde::{Deserialize, Serialize};

/// Distance tolerance used by the default job.
pub const DEFAULT_PATH_EPSILON: f64 = 0.5;

/// Settings for a complete segment, optimize and plan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub flatten: FlattenConfig,
    pub selection: SelectionConfig,
    pub optimizer: OptimizerConfig,
    pub planner: PlannerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            flatten: FlattenConfig {
                path_epsilon: DEFAULT_PATH_EPSILON,
                ..FlattenConfig::default()
            },
            selection: SelectionConfig::default(),
            optimizer: OptimizerConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config {}", path.display()))?,
            Format::Toml => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML config {}", path.display()))?,
        };

        config
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize config")?
            }
            Format::Toml => toml::to_string_pretty(self).context("Failed to serialize config")?,
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Validates every section.
    pub fn validate(&self) -> plotkit_core::Result<()> {
        self.flatten.validate()?;
        self.optimizer.validate()?;
        self.planner.validate()?;
        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => bail!(
                "Config file must be .json or .toml: {}",
                path.display()
            ),
        }
    }
}
