//! Configuration types for nwalign

use crate::NwError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Linear scoring parameters. Any integer is accepted, including
/// non-positive match or non-negative gap values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_match_score", rename = "match")]
    pub match_score: i32,
    #[serde(default = "default_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_gap")]
    pub gap: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Columns per block when rendering text output (0 = single block)
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    #[serde(default = "default_show_identity")]
    pub show_identity: bool,
}

// Default value functions
fn default_match_score() -> i32 { 2 }
fn default_mismatch() -> i32 { -1 }
fn default_gap() -> i32 { -2 }
fn default_format() -> String { "text".to_string() }
fn default_line_width() -> usize { 0 }
fn default_show_identity() -> bool { false }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch: default_mismatch(),
            gap: default_gap(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            line_width: default_line_width(),
            show_identity: default_show_identity(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, NwError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| NwError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), NwError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| NwError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
