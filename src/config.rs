//! Configuration management for the job signals engine

use crate::error::{AnalystError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Engine parameters shared by every analysis in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Skills kept per role by the TF-IDF ranker
    pub top_k: usize,
    /// Minimum number of postings a skill pair must share to become an edge
    pub min_cofrequency: u64,
    /// Roles kept in the role frequency table
    pub role_top_n: usize,
    /// Compute the analyses of a run on the rayon thread pool
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            min_cofrequency: 2,
            role_top_n: 20,
            parallel: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
            color_output: true,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(AnalystError::Configuration("top_k must be at least 1".to_string()));
        }
        if self.min_cofrequency == 0 {
            return Err(AnalystError::Configuration(
                "min_cofrequency must be at least 1".to_string(),
            ));
        }
        if self.role_top_n == 0 {
            return Err(AnalystError::Configuration(
                "role_top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AnalystError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.analysis.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AnalystError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-signals")
            .join("config.toml")
    }
}
