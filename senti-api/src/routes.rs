//! Route definitions for the sentiment analysis API.
//!
//! Provides HTTP endpoints for statement analysis, insight generation,
//! fixture data access, and health checks.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use senti_core::{InfluencerData, InsightSummary, Sentiment};

use crate::service::SentimentService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SentimentService>,
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Statement analysis request body.
#[derive(Debug, Deserialize)]
pub struct StatementRequest {
    pub statements: Vec<String>,
}

/// Bulk analysis request body.
#[derive(Debug, Deserialize)]
pub struct BulkStatementRequest {
    pub statements: Vec<String>,
    #[serde(default)]
    pub include_metadata: bool,
}

/// Per-statement analysis response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub statement: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub confidence: f64,
    pub keywords_found: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Active classification policy response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzerConfigResponse {
    pub positive_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
    pub neutral_keywords: Vec<String>,
    pub confidence_threshold: f64,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn empty_statements_error() -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "No statements provided".into(),
            code: "NO_STATEMENTS".into(),
        }),
    )
}

// ============================================================================
// Router
// ============================================================================

/// Build the API router with all routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/sentiment", post(analyze_sentiment))
        .route("/insight", post(insight_summary))
        .route("/bulk-analysis", post(bulk_analysis))
        .route("/dummy-statements", get(dummy_statements))
        .route("/influencer-data", get(influencer_data))
        .route("/health", get(health))
        .route("/config", get(analyzer_config))
        .with_state(state)
}

// ============================================================================
// Analysis Handlers
// ============================================================================

/// Analyze sentiment of statements with per-statement metrics.
async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<StatementRequest>,
) -> Result<Json<Vec<SentimentRecord>>, ErrorReply> {
    if request.statements.is_empty() {
        return Err(empty_statements_error());
    }

    let results = state.service.analyze_statements(&request.statements);
    let records = request
        .statements
        .into_iter()
        .zip(results)
        .map(|(statement, result)| SentimentRecord {
            statement,
            sentiment: result.sentiment,
            score: result.score,
            confidence: result.confidence,
            keywords_found: result.keywords_found,
        })
        .collect();

    Ok(Json(records))
}

/// Generate an insight summary with actionable recommendations.
async fn insight_summary(
    State(state): State<AppState>,
    Json(request): Json<StatementRequest>,
) -> Result<Json<InsightSummary>, ErrorReply> {
    if request.statements.is_empty() {
        return Err(empty_statements_error());
    }

    Ok(Json(state.service.generate_insights(&request.statements, false)))
}

/// Bulk sentiment analysis with optional processing metadata.
async fn bulk_analysis(
    State(state): State<AppState>,
    Json(request): Json<BulkStatementRequest>,
) -> Result<Json<InsightSummary>, ErrorReply> {
    if request.statements.is_empty() {
        return Err(empty_statements_error());
    }

    Ok(Json(
        state
            .service
            .generate_insights(&request.statements, request.include_metadata),
    ))
}

// ============================================================================
// Data Handlers
// ============================================================================

/// Sample influencer statements, fixture or fallback.
async fn dummy_statements(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.service.dummy_statements().await)
}

/// Complete fixture dataset with metadata.
async fn influencer_data(
    State(state): State<AppState>,
) -> Result<Json<InfluencerData>, ErrorReply> {
    state.service.influencer_data().await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "Failed to load influencer data");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Error loading data: {}", e),
                code: "DATA_UNAVAILABLE".into(),
            }),
        )
    })
}

// ============================================================================
// Health / Config Handlers
// ============================================================================

/// Health check handler.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: "sentiment-analysis-api".into(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Current analyzer configuration.
async fn analyzer_config(State(state): State<AppState>) -> Json<AnalyzerConfigResponse> {
    let config = state.service.analyzer_config();
    Json(AnalyzerConfigResponse {
        positive_keywords: config.positive_keywords.clone(),
        negative_keywords: config.negative_keywords.clone(),
        neutral_keywords: config.neutral_keywords.clone(),
        confidence_threshold: config.confidence_threshold,
    })
}
