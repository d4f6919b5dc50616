//! Journal service: validate, process, persist, aggregate.

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use echo_core::{AiGateway, Error, InsightsReport, JournalRecord, JournalRepository, Result};
use echo_inference::{CachedGateway, EntryProcessor, InsightsAggregator, ResponseCache};

/// Entry points for creating entries, listing them, and building insights.
///
/// The processor and aggregator share one gateway and one response cache.
pub struct JournalService {
    repository: Arc<dyn JournalRepository>,
    processor: EntryProcessor,
    aggregator: InsightsAggregator,
}

impl JournalService {
    pub fn new(
        repository: Arc<dyn JournalRepository>,
        gateway: Arc<dyn AiGateway>,
        cache: ResponseCache,
    ) -> Self {
        let resolver = CachedGateway::new(gateway, cache);
        Self {
            repository,
            processor: EntryProcessor::from_resolver(resolver.clone()),
            aggregator: InsightsAggregator::from_resolver(resolver),
        }
    }

    /// Process and store a new entry.
    ///
    /// Rejects empty or whitespace-only content before any AI call. Once
    /// past validation only a storage failure can make this fail.
    #[instrument(skip(self, content), fields(subsystem = "journal", component = "service", op = "create_entry", owner_id = %owner_id))]
    pub async fn create_entry(&self, owner_id: Uuid, content: &str) -> Result<JournalRecord> {
        if content.trim().is_empty() {
            return Err(Error::InvalidInput("Content is required".to_string()));
        }

        let processed = self.processor.process(content).await;
        let record = JournalRecord::new(owner_id, content, processed);
        self.repository.insert(record.clone()).await?;

        info!(entry_id = %record.id, mood = %record.mood, "Journal entry created");
        Ok(record)
    }

    /// The owner's entries, newest first.
    pub async fn list_entries(&self, owner_id: Uuid) -> Result<Vec<JournalRecord>> {
        let mut records = self.repository.list_for_owner(owner_id).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    /// Mood counts and summary across all of the owner's entries.
    #[instrument(skip(self), fields(subsystem = "journal", component = "service", op = "insights", owner_id = %owner_id))]
    pub async fn insights(&self, owner_id: Uuid) -> Result<InsightsReport> {
        let records = self.repository.list_for_owner(owner_id).await?;
        Ok(self.aggregator.aggregate(&records).await)
    }
}
