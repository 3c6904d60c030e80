//! Configuration validation for Senti services.
//!
//! Provides validation logic for configuration fields to ensure
//! all required values are present and within valid ranges.

use std::collections::HashSet;
use thiserror::Error;

use crate::config::{AnalyzerConfig, Config, ObservabilityConfig, ServiceConfig};

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port {port}: must be non-zero")]
    InvalidPort { port: u16, field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Empty keyword list: {field}")]
    EmptyKeywordList { field: String },

    #[error("Duplicate keyword {keyword:?} in {field}")]
    DuplicateKeyword { field: String, keyword: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.service.validate() {
            errors.push(e);
        }
        if let Err(e) = self.observability.validate() {
            errors.push(e);
        }
        if let Err(e) = self.analyzer.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(ValidationError::Multiple(errors))
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort {
                port: self.port,
                field: "service.port".into(),
            });
        }
        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("{:?} is not one of {:?}", self.log_level, LEVELS),
            });
        }
        if self.log_format != "pretty" && self.log_format != "json" {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("{:?} is not \"pretty\" or \"json\"", self.log_format),
            });
        }
        Ok(())
    }
}

impl Validate for AnalyzerConfig {
    fn validate(&self) -> ValidationResult<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ValidationError::InvalidValue {
                field: "analyzer.confidence_threshold".into(),
                reason: format!("{} is outside [0, 1]", self.confidence_threshold),
            });
        }
        if !(0.0..=1.0).contains(&self.minimum_score) || !(0.0..=1.0).contains(&self.maximum_score)
        {
            return Err(ValidationError::InvalidValue {
                field: "analyzer.minimum_score/maximum_score".into(),
                reason: "score bounds must lie within [0, 1]".into(),
            });
        }
        if self.minimum_score >= self.maximum_score {
            return Err(ValidationError::InvalidValue {
                field: "analyzer.minimum_score".into(),
                reason: format!(
                    "minimum_score {} must be below maximum_score {}",
                    self.minimum_score, self.maximum_score
                ),
            });
        }

        for (field, keywords) in [
            ("analyzer.positive_keywords", &self.positive_keywords),
            ("analyzer.negative_keywords", &self.negative_keywords),
            ("analyzer.neutral_keywords", &self.neutral_keywords),
        ] {
            validate_keyword_list(field, keywords)?;
        }

        Ok(())
    }
}

/// Keyword lists must be non-empty and duplicate-free after lowercasing;
/// matching is case-insensitive so duplicates would double-count.
fn validate_keyword_list(field: &str, keywords: &[String]) -> ValidationResult<()> {
    if keywords.is_empty() {
        return Err(ValidationError::EmptyKeywordList {
            field: field.into(),
        });
    }

    let mut seen = HashSet::new();
    for keyword in keywords {
        if !seen.insert(keyword.to_lowercase()) {
            return Err(ValidationError::DuplicateKeyword {
                field: field.into(),
                keyword: keyword.clone(),
            });
        }
    }
    Ok(())
}
