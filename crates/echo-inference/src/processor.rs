//! Journal entry processing: reflection plus mood, with fallbacks.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use echo_core::defaults;
use echo_core::{AiGateway, GatewayKind, MoodLabel, ProcessedEntry};

use crate::cache::ResponseCache;
use crate::mood::MoodClassifier;
use crate::resolve::{CachedGateway, FallbackReason, Resolved};

/// Turns raw entry text into a complete [`ProcessedEntry`].
///
/// `process` never fails: a missing credential or a failed call degrades
/// to documented fallback values so the caller can always persist a record.
/// Callers must reject empty text before calling.
#[derive(Clone)]
pub struct EntryProcessor {
    resolver: CachedGateway,
}

impl EntryProcessor {
    pub fn new(gateway: Arc<dyn AiGateway>, cache: ResponseCache) -> Self {
        Self::from_resolver(CachedGateway::new(gateway, cache))
    }

    pub fn from_resolver(resolver: CachedGateway) -> Self {
        Self { resolver }
    }

    /// Produce the reflection and mood for `text`.
    ///
    /// The two lookups run concurrently and independently; either may fall
    /// back without affecting the other.
    #[instrument(skip(self, text), fields(subsystem = "inference", component = "entry_processor", op = "process", text_len = text.len()))]
    pub async fn process(&self, text: &str) -> ProcessedEntry {
        let start = Instant::now();
        let (reflection, mood) = tokio::join!(self.reflection(text), self.mood(text));

        let reflection_fallback = reflection.is_fallback();
        let mood_fallback = mood.is_fallback();

        let entry = ProcessedEntry {
            ai_response: reflection.or_fallback(reflection_fallback_text),
            mood: mood.or_fallback(|_| MoodLabel::Neutral),
        };

        info!(
            mood = %entry.mood,
            reflection_fallback,
            mood_fallback,
            duration_ms = start.elapsed().as_millis() as u64,
            "Entry processed"
        );
        entry
    }

    /// Reflection for `text`, or why it is unavailable.
    pub async fn reflection(&self, text: &str) -> Resolved<String> {
        self.resolver
            .resolve(GatewayKind::Reflection, text)
            .await
            .map(|reflection| {
                if reflection.trim().is_empty() {
                    defaults::REFLECTION_PLACEHOLDER.to_string()
                } else {
                    reflection
                }
            })
    }

    /// Mood for `text`, or why it is unavailable. The raw sentiment label is
    /// what gets cached; classification happens on every read.
    pub async fn mood(&self, text: &str) -> Resolved<MoodLabel> {
        self.resolver
            .resolve(GatewayKind::Sentiment, text)
            .await
            .map(|label| MoodClassifier::classify(&label))
    }
}

fn reflection_fallback_text(reason: &FallbackReason) -> String {
    match reason {
        FallbackReason::CredentialMissing => defaults::REFLECTION_FALLBACK_NO_KEY.to_string(),
        FallbackReason::Upstream(_) => defaults::REFLECTION_FALLBACK_FAILED.to_string(),
    }
}
