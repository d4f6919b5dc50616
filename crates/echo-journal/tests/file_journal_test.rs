//! End-to-end journal flow over a JSON file store and a mock gateway.

use std::sync::Arc;

use echo_core::{GatewayKind, MoodCounts};
use echo_inference::mock::MockGateway;
use echo_inference::ResponseCache;
use echo_journal::{FileJournalStore, JournalService};
use uuid::Uuid;

#[tokio::test]
async fn test_entries_and_insights_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    let owner = Uuid::new_v4();
    let gateway = MockGateway::new()
        .with_response_mapping(GatewayKind::Sentiment, "Lost my keys", "NEGATIVE")
        .with_response(GatewayKind::Summary, "A mixed week.");

    {
        let store = Arc::new(FileJournalStore::open(&path).await.unwrap());
        let service = JournalService::new(
            store,
            Arc::new(gateway.clone()),
            ResponseCache::default(),
        );
        service.create_entry(owner, "Sunny walk").await.unwrap();
        service.create_entry(owner, "Lost my keys").await.unwrap();
    }

    let store = Arc::new(FileJournalStore::open(&path).await.unwrap());
    let service = JournalService::new(store, Arc::new(gateway), ResponseCache::default());

    let entries = service.list_entries(owner).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].content, "Lost my keys");

    let report = service.insights(owner).await.unwrap();
    assert_eq!(
        report.mood_counts,
        MoodCounts {
            happy: 1,
            sad: 1,
            ..MoodCounts::default()
        }
    );
    assert_eq!(report.summary, "A mixed week.");
}

#[tokio::test]
async fn test_failing_gateway_still_records_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.json");
    let store = Arc::new(FileJournalStore::open(&path).await.unwrap());
    let service = JournalService::new(
        store,
        Arc::new(MockGateway::new().failing_with(503)),
        ResponseCache::default(),
    );

    let record = service.create_entry(Uuid::nil(), "hello").await.unwrap();
    assert_eq!(
        record.ai_response,
        "AI reflection not available (service unavailable)"
    );
    assert_eq!(record.mood, "neutral");

    let report = service.insights(Uuid::nil()).await.unwrap();
    assert_eq!(report.mood_counts.neutral, 1);
    assert_eq!(
        report.summary,
        "Insights summary not available (service unavailable)"
    );
}
