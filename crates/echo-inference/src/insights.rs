//! Mood aggregation and insights summary.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use echo_core::defaults;
use echo_core::{AiGateway, GatewayKind, InsightsReport, JournalRecord, MoodCounts};

use crate::cache::ResponseCache;
use crate::resolve::{CachedGateway, FallbackReason};

/// Tally moods across `entries`.
///
/// Entries whose stored mood is not in the vocabulary are skipped, so the
/// total equals the number of recognized entries.
pub fn tally_moods(entries: &[JournalRecord]) -> MoodCounts {
    let mut counts = MoodCounts::default();
    for entry in entries {
        match entry.mood_label() {
            Some(mood) => counts.increment(mood),
            None => debug!(entry_id = %entry.id, mood = %entry.mood, "Skipping unrecognized mood"),
        }
    }
    counts
}

/// Builds an [`InsightsReport`] from a user's stored entries.
#[derive(Clone)]
pub struct InsightsAggregator {
    resolver: CachedGateway,
}

impl InsightsAggregator {
    pub fn new(gateway: Arc<dyn AiGateway>, cache: ResponseCache) -> Self {
        Self::from_resolver(CachedGateway::new(gateway, cache))
    }

    pub fn from_resolver(resolver: CachedGateway) -> Self {
        Self { resolver }
    }

    /// Count moods and summarize the distribution. Never fails.
    ///
    /// The distribution string doubles as the summary cache payload, so two
    /// users with identical counts share a cached summary.
    #[instrument(skip(self, entries), fields(subsystem = "inference", component = "insights", op = "aggregate", entry_count = entries.len()))]
    pub async fn aggregate(&self, entries: &[JournalRecord]) -> InsightsReport {
        let start = Instant::now();
        let mood_counts = tally_moods(entries);
        let distribution = mood_counts.describe();

        let outcome = self
            .resolver
            .resolve(GatewayKind::Summary, &distribution)
            .await;
        let fallback = outcome.is_fallback();
        let summary = outcome.or_fallback(summary_fallback_text);

        info!(
            counted = mood_counts.total(),
            fallback,
            duration_ms = start.elapsed().as_millis() as u64,
            "Insights aggregated"
        );

        InsightsReport {
            mood_counts,
            summary,
        }
    }
}

fn summary_fallback_text(reason: &FallbackReason) -> String {
    match reason {
        FallbackReason::CredentialMissing => defaults::SUMMARY_FALLBACK_NO_KEY.to_string(),
        FallbackReason::Upstream(_) => defaults::SUMMARY_FALLBACK_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGateway;
    use echo_core::{MoodLabel, ProcessedEntry};
    use uuid::Uuid;

    fn record(mood: &str) -> JournalRecord {
        let mut record = JournalRecord::new(
            Uuid::nil(),
            "entry",
            ProcessedEntry {
                ai_response: "ok".to_string(),
                mood: MoodLabel::Neutral,
            },
        );
        record.mood = mood.to_string();
        record
    }

    fn records(moods: &[&str]) -> Vec<JournalRecord> {
        moods.iter().map(|m| record(m)).collect()
    }

    #[test]
    fn test_tally_counts_each_mood() {
        let counts = tally_moods(&records(&["happy", "happy", "sad"]));
        assert_eq!(
            counts,
            MoodCounts {
                happy: 2,
                sad: 1,
                stressed: 0,
                calm: 0,
                neutral: 0,
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_tally_skips_unrecognized_moods() {
        let counts = tally_moods(&records(&["calm", "ecstatic", "", "Happy"]));
        assert_eq!(counts.calm, 1);
        assert_eq!(counts.total(), 1);
    }

    #[tokio::test]
    async fn test_aggregate_uses_summary() {
        let mock = MockGateway::new().with_response(GatewayKind::Summary, "Mostly upbeat.");
        let aggregator = InsightsAggregator::new(Arc::new(mock.clone()), ResponseCache::default());

        let report = aggregator
            .aggregate(&records(&["happy", "happy", "sad"]))
            .await;

        assert_eq!(report.mood_counts.happy, 2);
        assert_eq!(report.mood_counts.sad, 1);
        assert_eq!(report.summary, "Mostly upbeat.");

        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].payload,
            "happy: 2, sad: 1, stressed: 0, calm: 0, neutral: 0"
        );
    }

    #[tokio::test]
    async fn test_aggregate_empty_never_fails() {
        let mock = MockGateway::new();
        let aggregator = InsightsAggregator::new(Arc::new(mock), ResponseCache::default());

        let report = aggregator.aggregate(&[]).await;

        assert_eq!(report.mood_counts, MoodCounts::default());
        assert_eq!(report.mood_counts.total(), 0);
        assert!(!report.summary.is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_without_credential() {
        let mock = MockGateway::new().without_credential();
        let aggregator = InsightsAggregator::new(Arc::new(mock.clone()), ResponseCache::default());

        let report = aggregator.aggregate(&records(&["calm"])).await;

        assert_eq!(
            report.summary,
            "Insights summary not available (API key missing)"
        );
        assert_eq!(report.mood_counts.calm, 1);
        assert_eq!(mock.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_aggregate_with_failing_gateway() {
        let mock = MockGateway::new().failing_with(500);
        let aggregator = InsightsAggregator::new(Arc::new(mock), ResponseCache::default());

        let report = aggregator.aggregate(&records(&["sad", "stressed"])).await;

        assert_eq!(
            report.summary,
            "Insights summary not available (service unavailable)"
        );
        assert_eq!(report.mood_counts.total(), 2);
    }

    #[tokio::test]
    async fn test_aggregate_summary_is_cached_by_distribution() {
        let mock = MockGateway::new();
        let aggregator = InsightsAggregator::new(Arc::new(mock.clone()), ResponseCache::default());

        aggregator.aggregate(&records(&["happy", "sad"])).await;
        // Same counts in a different order share the cached summary.
        aggregator.aggregate(&records(&["sad", "happy"])).await;
        aggregator.aggregate(&records(&["sad"])).await;

        assert_eq!(mock.call_count(GatewayKind::Summary), 2);
    }
}
