//! Structured logging schema and field name constants for echo.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, cache hits and misses, config choices |
//! | TRACE | Per-item iteration (mood tally) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "inference", "journal", "cli"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "huggingface", "response_cache", "entry_processor"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "invoke", "process", "aggregate", "create_entry"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Journal owner UUID.
pub const OWNER_ID: &str = "owner_id";

/// Journal record UUID.
pub const ENTRY_ID: &str = "entry_id";

/// Gateway call purpose ("reflection", "sentiment", "summary").
pub const KIND: &str = "kind";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of journal entries scanned.
pub const ENTRY_COUNT: &str = "entry_count";

/// Byte length of a gateway payload.
pub const PAYLOAD_LEN: &str = "payload_len";

/// Byte length of a gateway response.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

/// HTTP status returned by the inference service.
pub const STATUS: &str = "status";

/// Whether a lookup was served from the response cache.
pub const CACHE_HIT: &str = "cache_hit";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Reason a fallback value replaced AI output.
pub const FALLBACK: &str = "fallback";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique_snake_case() {
        let fields = [
            SUBSYSTEM,
            COMPONENT,
            OPERATION,
            OWNER_ID,
            ENTRY_ID,
            KIND,
            DURATION_MS,
            ENTRY_COUNT,
            PAYLOAD_LEN,
            RESPONSE_LEN,
            MODEL,
            STATUS,
            CACHE_HIT,
            FALLBACK,
            ERROR_MSG,
            SLOW,
        ];
        let unique: HashSet<_> = fields.iter().collect();
        assert_eq!(unique.len(), fields.len());
        for field in fields {
            assert!(field
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
