//! Integration tests for the Senti API.
//!
//! Tests the full HTTP surface: analysis, insights, bulk analysis, fixture
//! data access, health, and configuration.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use senti_api::routes::{ErrorResponse, SentimentRecord};
use senti_common::config::Config;
use senti_core::InsightSummary;

const FIXTURE: &str = r#"{
    "influencer_statements": [
        {
            "id": 1,
            "influencer": "tech_sarah",
            "statement": "I love this product, it's amazing",
            "category": "product_review",
            "timestamp": "2024-01-15T10:30:00Z"
        },
        {
            "id": 2,
            "influencer": "gadget_mike",
            "statement": "The update was disappointing",
            "category": "software_update",
            "timestamp": "2024-01-16T14:00:00Z"
        }
    ]
}"#;

/// Test app backed by a fixture file in an isolated temp directory.
fn create_test_app(temp_dir: &TempDir) -> axum::Router {
    let fixture_path = temp_dir.path().join("dummy_statements.json");
    std::fs::write(&fixture_path, FIXTURE).unwrap();

    let mut config = Config::default();
    config.data.fixture_path = fixture_path;
    senti_api::build_router(config)
}

/// Test app whose fixture path points at a missing file.
fn create_test_app_without_fixture(temp_dir: &TempDir) -> axum::Router {
    let mut config = Config::default();
    config.data.fixture_path = temp_dir.path().join("missing.json");
    senti_api::build_router(config)
}

/// Helper to make a request and get JSON response.
async fn request_json<T: serde::de::DeserializeOwned>(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, T) {
    let request = Request::builder().method(method).uri(uri);

    let request = if let Some(b) = body {
        request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        request.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: T = serde_json::from_slice(&body).unwrap();

    (status, json)
}

// ─────────────────────────────────────────────────────────────────────────────
// Health and Config
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_check() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, json): (_, Value) = request_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "sentiment-analysis-api");
    // RFC 3339 timestamp
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_config_returns_default_keywords() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, json): (_, Value) = request_json(&app, Method::GET, "/config", None).await;

    assert_eq!(status, StatusCode::OK);
    let positive: Vec<String> =
        serde_json::from_value(json["positive_keywords"].clone()).unwrap();
    let negative: Vec<String> =
        serde_json::from_value(json["negative_keywords"].clone()).unwrap();
    let neutral: Vec<String> = serde_json::from_value(json["neutral_keywords"].clone()).unwrap();

    assert_eq!(positive, Config::default().analyzer.positive_keywords);
    assert_eq!(negative, Config::default().analyzer.negative_keywords);
    assert_eq!(neutral, Config::default().analyzer.neutral_keywords);
    assert_eq!(json["confidence_threshold"], 0.7);
}

// ─────────────────────────────────────────────────────────────────────────────
// Sentiment Analysis
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_sentiment_positive_statement() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, records): (_, Vec<SentimentRecord>) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(json!({
            "statements": ["I love the new product launch! It's amazing"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.sentiment.as_str(), "positive");
    assert!(record.keywords_found.contains(&"love".to_string()));
    assert!(record.keywords_found.contains(&"amazing".to_string()));
    assert!(record.score > 0.6 && record.score <= 0.9);
}

#[tokio::test]
async fn test_sentiment_negative_statement() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, records): (_, Vec<SentimentRecord>) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(json!({
            "statements": ["The recent update was disappointing and didn't meet expectations."]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let record = &records[0];
    assert_eq!(record.sentiment.as_str(), "negative");
    assert!(record
        .keywords_found
        .contains(&"disappointing".to_string()));
}

#[tokio::test]
async fn test_sentiment_neutral_statement_without_matches() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, records): (_, Vec<SentimentRecord>) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(json!({
            "statements": ["The weather report mentioned rain tomorrow."]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let record = &records[0];
    assert_eq!(record.sentiment.as_str(), "neutral");
    assert!(record.keywords_found.is_empty());
    assert!(record.score >= 0.4 && record.score <= 0.6);
}

#[tokio::test]
async fn test_sentiment_preserves_statement_order() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, records): (_, Vec<SentimentRecord>) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(json!({
            "statements": ["I love this", "This is terrible"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(records[0].statement, "I love this");
    assert_eq!(records[0].sentiment.as_str(), "positive");
    assert_eq!(records[1].statement, "This is terrible");
    assert_eq!(records[1].sentiment.as_str(), "negative");
}

#[tokio::test]
async fn test_sentiment_empty_statements_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, error): (_, ErrorResponse) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(json!({ "statements": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "NO_STATEMENTS");
}

// ─────────────────────────────────────────────────────────────────────────────
// Insight Generation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_insight_positive_majority() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, summary): (_, InsightSummary) = request_json(
        &app,
        Method::POST,
        "/insight",
        Some(json!({
            "statements": [
                "I love this product",
                "This is amazing work",
                "Excellent quality, impressed",
                "The update was disappointing",
                "Service has been terrible"
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(summary.summary.contains("3/5 (60.0%)"));
    assert_eq!(summary.total_statements, 5);

    let distributed: usize = summary.sentiment_distribution.values().sum();
    assert_eq!(distributed, summary.total_statements);
}

#[tokio::test]
async fn test_insight_average_score_matches_sentiment_scores() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);
    let statements = json!({
        "statements": [
            "I love this product",
            "This was disappointing",
            "Excellent and amazing work"
        ]
    });

    let (_, records): (_, Vec<SentimentRecord>) = request_json(
        &app,
        Method::POST,
        "/sentiment",
        Some(statements.clone()),
    )
    .await;

    // No neutral results in this batch, so scores are deterministic and the
    // insight average must equal the rounded mean of per-statement scores.
    let mean: f64 = records.iter().map(|r| r.score).sum::<f64>() / records.len() as f64;
    let expected = (mean * 1000.0).round() / 1000.0;

    let (_, summary): (_, InsightSummary) =
        request_json(&app, Method::POST, "/insight", Some(statements)).await;
    assert!((summary.average_score - expected).abs() < 1e-3);
}

#[tokio::test]
async fn test_insight_empty_statements_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, error): (_, ErrorResponse) = request_json(
        &app,
        Method::POST,
        "/insight",
        Some(json!({ "statements": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "NO_STATEMENTS");
}

// ─────────────────────────────────────────────────────────────────────────────
// Bulk Analysis
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bulk_analysis_without_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, summary): (_, InsightSummary) = request_json(
        &app,
        Method::POST,
        "/bulk-analysis",
        Some(json!({
            "statements": ["I love this product", "This was disappointing"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!summary
        .recommendations
        .iter()
        .any(|r| r.contains("high-confidence results")));
}

#[tokio::test]
async fn test_bulk_analysis_with_metadata_appends_one_recommendation() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, summary): (_, InsightSummary) = request_json(
        &app,
        Method::POST,
        "/bulk-analysis",
        Some(json!({
            "statements": [
                "I love this amazing product",
                "This was disappointing",
                "No opinion on this one"
            ],
            "include_metadata": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let metadata: Vec<&String> = summary
        .recommendations
        .iter()
        .filter(|r| r.contains("high-confidence results"))
        .collect();
    assert_eq!(metadata.len(), 1);
    // "I love this amazing product" scores confidence 0.8; the other two stay at or below 0.7
    assert!(metadata[0].contains("1/3 high-confidence results"));
}

#[tokio::test]
async fn test_bulk_analysis_empty_statements_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, error): (_, ErrorResponse) = request_json(
        &app,
        Method::POST,
        "/bulk-analysis",
        Some(json!({ "statements": [], "include_metadata": true })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.code, "NO_STATEMENTS");
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixture Data
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dummy_statements_from_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, statements): (_, Vec<String>) =
        request_json(&app, Method::GET, "/dummy-statements", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0], "I love this product, it's amazing");
}

#[tokio::test]
async fn test_dummy_statements_fallback_when_fixture_missing() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app_without_fixture(&temp_dir);

    let (status, statements): (_, Vec<String>) =
        request_json(&app, Method::GET, "/dummy-statements", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(statements.len(), 5);
    assert!(statements[0].contains("love the new product launch"));
}

#[tokio::test]
async fn test_influencer_data_from_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app(&temp_dir);

    let (status, json): (_, Value) =
        request_json(&app, Method::GET, "/influencer-data", None).await;

    assert_eq!(status, StatusCode::OK);
    let records = json["influencer_statements"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["influencer"], "tech_sarah");
    assert_eq!(records[1]["category"], "software_update");
}

#[tokio::test]
async fn test_influencer_data_missing_fixture_is_server_error() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_test_app_without_fixture(&temp_dir);

    let (status, error): (_, ErrorResponse) =
        request_json(&app, Method::GET, "/influencer-data", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.code, "DATA_UNAVAILABLE");
}

#[tokio::test]
async fn test_influencer_data_malformed_fixture_is_server_error() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_path = temp_dir.path().join("dummy_statements.json");
    std::fs::write(&fixture_path, "{broken json").unwrap();

    let mut config = Config::default();
    config.data.fixture_path = fixture_path;
    let app = senti_api::build_router(config);

    let (status, error): (_, ErrorResponse) =
        request_json(&app, Method::GET, "/influencer-data", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.code, "DATA_UNAVAILABLE");
}
