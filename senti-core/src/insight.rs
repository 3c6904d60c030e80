//! Insight aggregation over batches of analysis results.
//!
//! Folds per-statement results into a label distribution, an average score,
//! a majority-wins summary sentence, and an ordered list of recommendations.

use std::collections::BTreeMap;

use crate::types::{AnalysisResult, InsightSummary, Sentiment};

/// Confidence above which a result counts toward the high-confidence ratio.
const HIGH_CONFIDENCE: f64 = 0.7;

/// Capability interface for insight generators.
pub trait InsightGenerator: Send + Sync {
    /// Generate an insight summary from a batch of analysis results.
    fn generate(&self, results: &[AnalysisResult]) -> InsightSummary;
}

/// Insight generator producing detailed summaries and recommendations.
#[derive(Debug, Default)]
pub struct AdvancedInsightGenerator;

impl AdvancedInsightGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Recommendation rules, applied in order; all applicable ones fire.
    fn recommendations(
        pos: usize,
        neg: usize,
        neu: usize,
        total: usize,
        average_score: f64,
        confidence_ratio: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if neg > pos {
            recommendations
                .push("Address negative feedback urgently to prevent reputation damage".to_string());
            recommendations
                .push("Implement customer satisfaction improvement initiatives".to_string());
        }

        if pos as f64 > total as f64 * 0.6 {
            recommendations.push("Leverage positive sentiment for marketing campaigns".to_string());
            recommendations.push("Identify and amplify positive influencer voices".to_string());
        }

        if neu as f64 > total as f64 * 0.4 {
            recommendations.push("Engage neutral influencers with targeted content".to_string());
            recommendations.push("Provide more compelling value propositions".to_string());
        }

        if average_score < 0.4 {
            recommendations.push(
                "Critical: Overall sentiment is very low - immediate action required".to_string(),
            );
        } else if average_score > 0.7 {
            recommendations.push(
                "Excellent: Maintain current strategies and expand successful initiatives"
                    .to_string(),
            );
        }

        if confidence_ratio < 0.5 {
            recommendations
                .push("Consider gathering more data for better analysis confidence".to_string());
        }

        recommendations
    }
}

impl InsightGenerator for AdvancedInsightGenerator {
    fn generate(&self, results: &[AnalysisResult]) -> InsightSummary {
        if results.is_empty() {
            return InsightSummary {
                summary: "No statements to analyze.".to_string(),
                sentiment_distribution: BTreeMap::new(),
                average_score: 0.0,
                total_statements: 0,
                recommendations: Vec::new(),
            };
        }

        let mut distribution: BTreeMap<Sentiment, usize> =
            Sentiment::ALL.iter().map(|label| (*label, 0)).collect();
        let mut total_score = 0.0;
        let mut high_confidence_count = 0usize;

        for result in results {
            *distribution.entry(result.sentiment).or_insert(0) += 1;
            total_score += result.score;
            if result.confidence > HIGH_CONFIDENCE {
                high_confidence_count += 1;
            }
        }

        let total = results.len();
        let average_score = round3(total_score / total as f64);
        let confidence_ratio = high_confidence_count as f64 / total as f64;

        let pos = distribution[&Sentiment::Positive];
        let neg = distribution[&Sentiment::Negative];
        let neu = distribution[&Sentiment::Neutral];

        let mut summary = if pos > neg && pos > neu {
            format!(
                "Overwhelmingly positive sentiment detected ({}/{}, {}). Influencers are expressing high satisfaction and enthusiasm.",
                pos, total, percent(pos, total)
            )
        } else if neg > pos && neg > neu {
            format!(
                "Concerning negative sentiment trend ({}/{}, {}). Significant issues require immediate attention.",
                neg, total, percent(neg, total)
            )
        } else if neu > pos && neu > neg {
            format!(
                "Neutral sentiment dominates ({}/{}, {}). Influencers are taking a wait-and-see approach.",
                neu, total, percent(neu, total)
            )
        } else {
            "Mixed sentiments observed. Opinions are evenly divided among influencers with no clear majority.".to_string()
        };

        summary.push_str(&format!(
            " Analysis confidence: {} of statements analyzed with high confidence.",
            percent(high_confidence_count, total)
        ));

        let recommendations =
            Self::recommendations(pos, neg, neu, total, average_score, confidence_ratio);

        InsightSummary {
            summary,
            sentiment_distribution: distribution,
            average_score,
            total_statements: total,
            recommendations,
        }
    }
}

/// Round to 3 decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Percentage with one decimal place, e.g. "60.0%".
fn percent(count: usize, total: usize) -> String {
    format!("{:.1}%", 100.0 * count as f64 / total as f64)
}
