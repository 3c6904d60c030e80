//! Core data types for sentiment analysis and insight generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Sentiment
// ============================================================================

/// Sentiment label assigned to a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels, in distribution order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Lowercase wire name of the label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Result of analyzing a single statement.
///
/// Immutable once created; consumed by the insight generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Assigned sentiment label
    pub sentiment: Sentiment,
    /// Heuristic score within the configured bounds
    pub score: f64,
    /// Heuristic certainty in [0, 1]; not a calibrated probability
    pub confidence: f64,
    /// Keywords that matched, in configuration order
    pub keywords_found: Vec<String>,
}

// ============================================================================
// Insight Summary
// ============================================================================

/// Aggregated insight over a batch of analysis results.
///
/// Recomputed fresh per request; never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Natural-language summary of the batch
    pub summary: String,
    /// Count per sentiment label; values sum to `total_statements`
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    /// Mean of per-statement scores, rounded to 3 decimal places
    pub average_score: f64,
    /// Number of statements aggregated
    pub total_statements: usize,
    /// Actionable recommendations, in rule order
    pub recommendations: Vec<String>,
}

// ============================================================================
// Fixture Data
// ============================================================================

/// A sample influencer statement record from the fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerStatement {
    pub id: i64,
    pub influencer: String,
    pub statement: String,
    pub category: String,
    pub timestamp: String,
}

/// Full fixture dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerData {
    pub influencer_statements: Vec<InfluencerStatement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn test_distribution_serializes_with_string_keys() {
        let mut distribution = BTreeMap::new();
        for label in Sentiment::ALL {
            distribution.insert(label, 0usize);
        }
        distribution.insert(Sentiment::Negative, 2);

        let json = serde_json::to_value(&distribution).unwrap();
        assert_eq!(json["negative"], 2);
        assert_eq!(json["positive"], 0);
        assert_eq!(json["neutral"], 0);
    }

    #[test]
    fn test_fixture_schema_parses() {
        let raw = r#"{
            "influencer_statements": [
                {
                    "id": 1,
                    "influencer": "tech_sarah",
                    "statement": "I love this product",
                    "category": "product_review",
                    "timestamp": "2024-01-15T10:30:00Z"
                }
            ]
        }"#;
        let data: InfluencerData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.influencer_statements.len(), 1);
        assert_eq!(data.influencer_statements[0].influencer, "tech_sarah");
    }
}
