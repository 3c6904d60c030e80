//! Senti API - HTTP service for sentiment analysis and insight generation.
//!
//! This crate exposes the `senti-core` domain logic over a JSON HTTP API:
//! - `POST /sentiment` — per-statement sentiment classification
//! - `POST /insight` — aggregated insight summary with recommendations
//! - `POST /bulk-analysis` — insight summary with optional processing metadata
//! - `GET /dummy-statements` — sample statements (fixture or fallback)
//! - `GET /influencer-data` — complete fixture dataset
//! - `GET /health`, `GET /config` — service health and active policy
//!
//! Request handling is stateless over an immutable shared service; the only
//! nondeterminism is the bounded random score assigned to neutral results.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod routes;
pub mod service;

pub use routes::AppState;
pub use service::SentimentService;

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use senti_common::config::Config;

/// Build the API router with all routes and middleware.
pub fn build_router(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        service: Arc::new(SentimentService::new(config)),
    };

    routes::api_routes(state).layer(cors)
}

/// Start the API server.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let addr = SocketAddr::from((
        config.service.host.parse::<std::net::IpAddr>()?,
        config.service.port,
    ));

    let router = build_router(config.clone());

    tracing::info!(address = %addr, "Starting Senti API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
