//! # echo-inference
//!
//! AI pipeline for the echo journal.
//!
//! This crate provides:
//! - Hugging Face implementation of the [`AiGateway`] trait
//! - Gateway configuration from TOML or environment
//! - A TTL response cache shared by every gateway call site
//! - Sentiment to mood classification
//! - Entry processing (reflection + mood) with fallbacks
//! - Mood aggregation and insights summaries
//!
//! # Feature Flags
//!
//! - `mock`: expose [`mock::MockGateway`] to downstream tests
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use echo_inference::{EntryProcessor, HuggingFaceGateway, ResponseCache};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = HuggingFaceGateway::from_env().unwrap();
//!     let cache = ResponseCache::from_config(gateway.config());
//!     let processor = EntryProcessor::new(Arc::new(gateway), cache);
//!     let entry = processor.process("Long walk by the river today.").await;
//!     println!("{} ({})", entry.ai_response, entry.mood);
//! }
//! ```

pub mod cache;
pub mod config;
pub mod huggingface;
pub mod insights;
pub mod mood;
pub mod processor;
pub mod prompt;
pub mod resolve;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use echo_core::*;

pub use cache::{CacheEntry, CacheStats, ResponseCache};
pub use config::{ConfigError, ConfigResult, GatewayConfig};
pub use huggingface::HuggingFaceGateway;
pub use insights::{tally_moods, InsightsAggregator};
pub use mood::MoodClassifier;
pub use processor::EntryProcessor;
pub use resolve::{CachedGateway, FallbackReason, Resolved};
