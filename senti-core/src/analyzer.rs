//! Keyword-based sentiment classification.
//!
//! Classification is a strict-majority vote over substring keyword matches:
//! a label wins only when its match count strictly exceeds both other
//! counts. Every tie, including the zero-match case, falls to neutral.
//!
//! Matching is deliberately naive substring search on the lower-cased
//! statement, not tokenized word-boundary matching; "awful" inside a longer
//! word still matches.

use rand::Rng;
use senti_common::config::AnalyzerConfig;

use crate::types::{AnalysisResult, Sentiment};

/// Capability interface for sentiment analyzers.
pub trait SentimentAnalyzer: Send + Sync {
    /// Analyze sentiment of a single statement.
    fn analyze(&self, statement: &str) -> AnalysisResult;

    /// Analyze sentiment of multiple statements, independently and in order.
    fn analyze_batch(&self, statements: &[String]) -> Vec<AnalysisResult> {
        statements.iter().map(|s| self.analyze(s)).collect()
    }
}

/// Keyword-based sentiment analyzer using a configurable keyword policy.
pub struct KeywordAnalyzer {
    positive_keywords: Vec<String>,
    negative_keywords: Vec<String>,
    neutral_keywords: Vec<String>,
    minimum_score: f64,
    maximum_score: f64,
}

impl KeywordAnalyzer {
    /// Create an analyzer from the classification policy.
    ///
    /// Keywords are lowered once here so per-statement matching stays
    /// allocation-free on the keyword side.
    pub fn new(config: &AnalyzerConfig) -> Self {
        let lower = |keywords: &[String]| {
            keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect::<Vec<_>>()
        };

        tracing::info!(
            positive = config.positive_keywords.len(),
            negative = config.negative_keywords.len(),
            neutral = config.neutral_keywords.len(),
            "Keyword analyzer initialized"
        );

        Self {
            positive_keywords: lower(&config.positive_keywords),
            negative_keywords: lower(&config.negative_keywords),
            neutral_keywords: lower(&config.neutral_keywords),
            minimum_score: config.minimum_score,
            maximum_score: config.maximum_score,
        }
    }

    /// Collect keywords occurring as substrings of the lower-cased statement,
    /// preserving configuration order.
    fn matches(keywords: &[String], statement_lower: &str) -> Vec<String> {
        keywords
            .iter()
            .filter(|k| statement_lower.contains(k.as_str()))
            .cloned()
            .collect()
    }
}

impl SentimentAnalyzer for KeywordAnalyzer {
    fn analyze(&self, statement: &str) -> AnalysisResult {
        let statement_lower = statement.to_lowercase();

        let positive = Self::matches(&self.positive_keywords, &statement_lower);
        let negative = Self::matches(&self.negative_keywords, &statement_lower);
        let neutral = Self::matches(&self.neutral_keywords, &statement_lower);

        let p = positive.len();
        let n = negative.len();
        let u = neutral.len();

        if p > n && p > u {
            AnalysisResult {
                sentiment: Sentiment::Positive,
                score: self.maximum_score.min(0.6 + 0.1 * p as f64),
                confidence: 0.95f64.min(0.5 + 0.15 * p as f64),
                keywords_found: positive,
            }
        } else if n > p && n > u {
            AnalysisResult {
                sentiment: Sentiment::Negative,
                score: self.minimum_score.max(0.4 - 0.1 * n as f64),
                confidence: 0.95f64.min(0.5 + 0.15 * n as f64),
                keywords_found: negative,
            }
        } else {
            // Ties (including equal non-zero counts) and the no-match case
            // are neutral by construction. The score is drawn fresh per call.
            AnalysisResult {
                sentiment: Sentiment::Neutral,
                score: rand::thread_rng().gen_range(0.4..=0.6),
                confidence: 0.5 + 0.1 * u as f64,
                keywords_found: neutral,
            }
        }
    }
}
