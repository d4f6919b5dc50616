//! Centralized default constants for the echo journal.
//!
//! **This module is the single source of truth** for shared default values
//! and for the fallback strings that stand in for AI output. Every crate
//! references these constants instead of defining its own literals.

// =============================================================================
// INFERENCE
// =============================================================================

/// Default Hugging Face inference API base URL (model name is appended).
pub const HUGGINGFACE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default text-generation model for reflections.
pub const REFLECTION_MODEL: &str = "gpt2";

/// Default binary sentiment classifier.
pub const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Default text-generation model for insights summaries.
pub const SUMMARY_MODEL: &str = "gpt2";

/// Maximum generated length for a reflection.
pub const REFLECTION_MAX_LENGTH: u32 = 100;

/// Maximum generated length for an insights summary.
pub const SUMMARY_MAX_LENGTH: u32 = 50;

/// Sampling temperature for generated text.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Timeout for a single gateway request in seconds.
pub const GATEWAY_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// CACHE
// =============================================================================

/// Response cache time-to-live in seconds (5 minutes).
pub const CACHE_TTL_SECS: u64 = 300;

/// Prefix for every response cache key.
pub const CACHE_KEY_PREFIX: &str = "echo:";

// =============================================================================
// PLACEHOLDERS (service answered, expected field missing)
// =============================================================================

/// Returned when a generation reply has no `generated_text`.
pub const REFLECTION_PLACEHOLDER: &str = "AI reflection not available.";

/// Returned when a classification reply has no `label`.
pub const SENTIMENT_PLACEHOLDER: &str = "UNKNOWN";

/// Returned when a summary reply has no `generated_text`.
pub const SUMMARY_PLACEHOLDER: &str = "Insights summary not available.";

// =============================================================================
// FALLBACKS (no credential, or the call failed)
// =============================================================================

/// Reflection used when no API credential is configured.
pub const REFLECTION_FALLBACK_NO_KEY: &str = "AI reflection not available (API key missing)";

/// Reflection used when the gateway call failed.
pub const REFLECTION_FALLBACK_FAILED: &str = "AI reflection not available (service unavailable)";

/// Summary used when no API credential is configured.
pub const SUMMARY_FALLBACK_NO_KEY: &str = "Insights summary not available (API key missing)";

/// Summary used when the gateway call failed.
pub const SUMMARY_FALLBACK_FAILED: &str = "Insights summary not available (service unavailable)";

// =============================================================================
// STORAGE / CLI
// =============================================================================

/// Default journal file used by the CLI.
pub const JOURNAL_FILE: &str = "journal.json";

/// Default log filter when `RUST_LOG` is unset.
pub const LOG_FILTER: &str = "echo=info,echo_inference=info,echo_journal=info";
