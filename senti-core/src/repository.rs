//! Fixture data loading for sample influencer statements.

use async_trait::async_trait;
use senti_common::error::{Error, Result};
use std::path::{Path, PathBuf};

use crate::types::InfluencerData;

/// Fallback statements served when the fixture file is not available.
const FALLBACK_STATEMENTS: &[&str] = &[
    "I love the new product launch! It's amazing and everyone should try it.",
    "The recent update was disappointing and didn't meet expectations.",
    "I'm neutral about the changes, let's see how it goes.",
    "This brand always delivers quality, I'm impressed again.",
    "Not happy with the service lately, hope they improve soon.",
];

/// Capability interface for statement data sources.
#[async_trait]
pub trait DataRepository: Send + Sync {
    /// Load sample statement texts. Infallible: a missing or unreadable
    /// source yields the fallback list.
    async fn load_statements(&self) -> Vec<String>;

    /// Load the complete fixture dataset with metadata. Unlike
    /// `load_statements`, a missing or malformed fixture is an error here.
    async fn load_full(&self) -> Result<InfluencerData>;
}

/// JSON file-based repository for influencer statements.
pub struct JsonDataRepository {
    path: PathBuf,
}

impl JsonDataRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::info!(path = %path.display(), "JSON data repository initialized");
        Self { path }
    }

    fn fallback_statements() -> Vec<String> {
        FALLBACK_STATEMENTS.iter().map(|s| s.to_string()).collect()
    }

    async fn read_fixture(path: &Path) -> Result<InfluencerData> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::DataUnavailable(format!("fixture {} unreadable: {}", path.display(), e))
        })?;
        let data: InfluencerData = serde_json::from_str(&raw)?;
        Ok(data)
    }
}

#[async_trait]
impl DataRepository for JsonDataRepository {
    async fn load_statements(&self) -> Vec<String> {
        match Self::read_fixture(&self.path).await {
            Ok(data) => {
                let statements: Vec<String> = data
                    .influencer_statements
                    .into_iter()
                    .map(|item| item.statement)
                    .collect();
                tracing::debug!(
                    count = statements.len(),
                    path = %self.path.display(),
                    "Loaded statements from fixture"
                );
                statements
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Fixture unavailable, using fallback statements"
                );
                Self::fallback_statements()
            }
        }
    }

    async fn load_full(&self) -> Result<InfluencerData> {
        Self::read_fixture(&self.path).await
    }
}
