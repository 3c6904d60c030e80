//! Service layer orchestrating analysis, insight generation, and data loading.

use std::sync::Arc;
use std::time::Instant;

use senti_common::config::{AnalyzerConfig, Config};
use senti_common::error::Result;
use senti_core::{
    AdvancedInsightGenerator, AnalysisResult, DataRepository, InfluencerData, InsightGenerator,
    InsightSummary, JsonDataRepository, KeywordAnalyzer, SentimentAnalyzer,
};

/// Main service composing the analyzer, insight generator, and repository
/// behind their capability traits. Constructed once at startup; all request
/// handling reads shared immutable state.
pub struct SentimentService {
    config: Config,
    analyzer: Arc<dyn SentimentAnalyzer>,
    insights: Arc<dyn InsightGenerator>,
    repository: Arc<dyn DataRepository>,
}

impl SentimentService {
    /// Build the production service from configuration.
    pub fn new(config: Config) -> Self {
        let analyzer = Arc::new(KeywordAnalyzer::new(&config.analyzer));
        let insights = Arc::new(AdvancedInsightGenerator::new());
        let repository = Arc::new(JsonDataRepository::new(&config.data.fixture_path));

        tracing::info!("Sentiment service initialized");

        Self {
            config,
            analyzer,
            insights,
            repository,
        }
    }

    /// Analyze a batch of statements, independently and in order.
    pub fn analyze_statements(&self, statements: &[String]) -> Vec<AnalysisResult> {
        let start = Instant::now();
        let results = self.analyzer.analyze_batch(statements);

        tracing::info!(
            count = statements.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Analyzed statements"
        );
        results
    }

    /// Analyze a batch and fold the results into an insight summary.
    ///
    /// When `include_metadata` is set, one extra recommendation reporting
    /// the high-confidence result count is appended.
    pub fn generate_insights(&self, statements: &[String], include_metadata: bool) -> InsightSummary {
        let results = self.analyze_statements(statements);
        let mut insights = self.insights.generate(&results);

        if include_metadata {
            let threshold = self.config.analyzer.confidence_threshold;
            let high_confidence = results.iter().filter(|r| r.confidence > threshold).count();
            insights.recommendations.push(format!(
                "Processing metadata: {}/{} high-confidence results",
                high_confidence,
                results.len()
            ));
        }

        insights
    }

    /// Sample statements for testing, fixture or fallback.
    pub async fn dummy_statements(&self) -> Vec<String> {
        self.repository.load_statements().await
    }

    /// Complete fixture dataset with metadata; errors when unavailable.
    pub async fn influencer_data(&self) -> Result<InfluencerData> {
        self.repository.load_full().await
    }

    /// The active classification policy.
    pub fn analyzer_config(&self) -> &AnalyzerConfig {
        &self.config.analyzer
    }
}
