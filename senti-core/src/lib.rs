//! Senti Core - Sentiment classification and insight aggregation.
//!
//! This crate provides the domain logic for the Senti services:
//! - Keyword-based sentiment classification with strict-majority tie-breaks
//! - Insight aggregation (distribution, average score, summary,
//!   recommendations)
//! - Fixture data loading with a hardcoded fallback
//!
//! # Architecture
//!
//! ```text
//! statements ──► SentimentAnalyzer ──► [AnalysisResult] ──► InsightGenerator ──► InsightSummary
//!                     ▲
//!               DataRepository (sample statements)
//! ```
//!
//! Statement-level analysis is stateless and order-preserving; the only
//! nondeterminism is the bounded random score assigned to neutral results.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analyzer;
pub mod insight;
pub mod repository;
pub mod types;

pub use analyzer::{KeywordAnalyzer, SentimentAnalyzer};
pub use insight::{AdvancedInsightGenerator, InsightGenerator};
pub use repository::{DataRepository, JsonDataRepository};
pub use types::{AnalysisResult, InfluencerData, InfluencerStatement, InsightSummary, Sentiment};
