//! Configuration management for Senti services.
//!
//! All Senti services share a unified configuration file at `~/.senti/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables (SENTI_* prefix)
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `SENTI_BIND_ADDRESS` → service.host
//! - `SENTI_PORT` → service.port
//! - `SENTI_LOG_LEVEL` → observability.log_level
//! - `SENTI_LOG_FORMAT` → observability.log_format
//! - `SENTI_DATA_PATH` → data.fixture_path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".senti"),
        |dirs| dirs.home_dir().join(".senti"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Service Configuration
// ============================================================================

/// HTTP service bind configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind address for the HTTP listener.
    /// Default: "127.0.0.1" (conservative, local only)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    4500
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "json" for structured JSON, "pretty" for human-readable.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Analyzer Configuration
// ============================================================================

/// Keyword-based classification policy.
///
/// Read-only after construction; this is the entire classification policy,
/// there are no learned parameters. Keywords are matched case-insensitively
/// as substrings of the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Keywords counted toward a positive classification.
    #[serde(default = "default_positive_keywords")]
    pub positive_keywords: Vec<String>,

    /// Keywords counted toward a negative classification.
    #[serde(default = "default_negative_keywords")]
    pub negative_keywords: Vec<String>,

    /// Keywords counted toward a neutral classification.
    #[serde(default = "default_neutral_keywords")]
    pub neutral_keywords: Vec<String>,

    /// Confidence above which a result counts as high-confidence.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Floor for negative scores.
    #[serde(default = "default_minimum_score")]
    pub minimum_score: f64,

    /// Ceiling for positive scores.
    #[serde(default = "default_maximum_score")]
    pub maximum_score: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            positive_keywords: default_positive_keywords(),
            negative_keywords: default_negative_keywords(),
            neutral_keywords: default_neutral_keywords(),
            confidence_threshold: default_confidence_threshold(),
            minimum_score: default_minimum_score(),
            maximum_score: default_maximum_score(),
        }
    }
}

fn default_positive_keywords() -> Vec<String> {
    [
        "love",
        "amazing",
        "impressed",
        "quality",
        "great",
        "excellent",
        "wonderful",
        "outstanding",
        "fantastic",
        "awesome",
        "perfect",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_negative_keywords() -> Vec<String> {
    [
        "disappointing",
        "not happy",
        "hope they improve",
        "bad",
        "terrible",
        "awful",
        "worst",
        "hate",
        "horrible",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_neutral_keywords() -> Vec<String> {
    [
        "neutral",
        "mixed feelings",
        "okay",
        "average",
        "uncertain",
        "unsure",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_minimum_score() -> f64 {
    0.1
}

fn default_maximum_score() -> f64 {
    0.9
}

// ============================================================================
// Data Configuration
// ============================================================================

/// Sample data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the influencer statement fixture file.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fixture_path: default_fixture_path(),
        }
    }
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("data/dummy_statements.json")
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Unified configuration for Senti services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP service binding
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Classification policy
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Sample data source
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists. Environment overrides are applied last.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::info!("Config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind) = std::env::var("SENTI_BIND_ADDRESS") {
            self.service.host = bind;
        }
        if let Ok(port) = std::env::var("SENTI_PORT") {
            if let Ok(p) = port.parse() {
                self.service.port = p;
            }
        }
        if let Ok(level) = std::env::var("SENTI_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Ok(format) = std::env::var("SENTI_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Ok(path) = std::env::var("SENTI_DATA_PATH") {
            self.data.fixture_path = PathBuf::from(path);
        }
    }
}
