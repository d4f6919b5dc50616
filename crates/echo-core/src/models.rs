//! Core data models for the echo journal.
//!
//! These types are shared across all echo crates and represent the core
//! domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// MOOD
// =============================================================================

/// Closed mood vocabulary derived from sentiment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Stressed,
    Calm,
    #[default]
    Neutral,
}

impl MoodLabel {
    /// Every mood, in display order.
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Stressed,
        MoodLabel::Calm,
        MoodLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Calm => "calm",
            MoodLabel::Neutral => "neutral",
        }
    }

    /// Look up a stored mood string. Returns `None` for anything outside the
    /// vocabulary; matching is exact (moods are stored lowercase).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of moods across a set of journal entries.
///
/// Every mood always has a counter, so serializing yields all five keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub happy: u64,
    pub sad: u64,
    pub stressed: u64,
    pub calm: u64,
    pub neutral: u64,
}

impl MoodCounts {
    pub fn get(&self, mood: MoodLabel) -> u64 {
        match mood {
            MoodLabel::Happy => self.happy,
            MoodLabel::Sad => self.sad,
            MoodLabel::Stressed => self.stressed,
            MoodLabel::Calm => self.calm,
            MoodLabel::Neutral => self.neutral,
        }
    }

    pub fn increment(&mut self, mood: MoodLabel) {
        let slot = match mood {
            MoodLabel::Happy => &mut self.happy,
            MoodLabel::Sad => &mut self.sad,
            MoodLabel::Stressed => &mut self.stressed,
            MoodLabel::Calm => &mut self.calm,
            MoodLabel::Neutral => &mut self.neutral,
        };
        *slot += 1;
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        MoodLabel::ALL.iter().map(|m| self.get(*m)).sum()
    }

    /// `(mood, count)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodLabel, u64)> + '_ {
        MoodLabel::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Human-readable distribution, e.g. `happy: 2, sad: 1, stressed: 0, calm: 0, neutral: 0`.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(mood, count)| format!("{}: {}", mood, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

/// Purpose of an AI gateway call. Selects endpoint, prompt and parsing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    Reflection,
    Sentiment,
    Summary,
}

impl GatewayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayKind::Reflection => "reflection",
            GatewayKind::Sentiment => "sentiment",
            GatewayKind::Summary => "summary",
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GatewayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reflection" => Ok(Self::Reflection),
            "sentiment" => Ok(Self::Sentiment),
            "summary" => Ok(Self::Summary),
            _ => Err(format!("unknown gateway kind: {}", s)),
        }
    }
}

// =============================================================================
// JOURNAL TYPES
// =============================================================================

/// Output of entry processing. Both fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedEntry {
    pub ai_response: String,
    pub mood: MoodLabel,
}

/// A persisted journal entry.
///
/// `mood` is kept in string form: records written by this system always hold
/// a [`MoodLabel`], but stored data from older writers may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub ai_response: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

impl JournalRecord {
    /// Build a new record from submitted content and its processed result.
    pub fn new(owner_id: Uuid, content: impl Into<String>, processed: ProcessedEntry) -> Self {
        Self {
            id: Uuid::now_v7(),
            owner_id,
            content: content.into(),
            ai_response: processed.ai_response,
            mood: processed.mood.as_str().to_string(),
            created_at: Utc::now(),
        }
    }

    /// The stored mood, if it is part of the vocabulary.
    pub fn mood_label(&self) -> Option<MoodLabel> {
        MoodLabel::parse(&self.mood)
    }
}

/// Aggregate mood statistics and a natural-language summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub mood_counts: MoodCounts,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_label_serializes_lowercase() {
        let json = serde_json::to_string(&MoodLabel::Stressed).unwrap();
        assert_eq!(json, "\"stressed\"");
        let back: MoodLabel = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(back, MoodLabel::Calm);
    }

    #[test]
    fn test_mood_label_parse() {
        assert_eq!(MoodLabel::parse("happy"), Some(MoodLabel::Happy));
        assert_eq!(MoodLabel::parse("neutral"), Some(MoodLabel::Neutral));
        assert_eq!(MoodLabel::parse("HAPPY"), None);
        assert_eq!(MoodLabel::parse("angry"), None);
        assert_eq!(MoodLabel::parse(""), None);
    }

    #[test]
    fn test_mood_label_default_is_neutral() {
        assert_eq!(MoodLabel::default(), MoodLabel::Neutral);
    }

    #[test]
    fn test_mood_counts_has_all_keys_when_empty() {
        let value = serde_json::to_value(MoodCounts::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for mood in MoodLabel::ALL {
            assert_eq!(obj[mood.as_str()], 0);
        }
    }

    #[test]
    fn test_mood_counts_increment_and_total() {
        let mut counts = MoodCounts::default();
        counts.increment(MoodLabel::Happy);
        counts.increment(MoodLabel::Happy);
        counts.increment(MoodLabel::Sad);

        assert_eq!(counts.get(MoodLabel::Happy), 2);
        assert_eq!(counts.get(MoodLabel::Sad), 1);
        assert_eq!(counts.get(MoodLabel::Calm), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_mood_counts_describe() {
        let mut counts = MoodCounts::default();
        counts.increment(MoodLabel::Calm);
        assert_eq!(
            counts.describe(),
            "happy: 0, sad: 0, stressed: 0, calm: 1, neutral: 0"
        );
    }

    #[test]
    fn test_gateway_kind_roundtrip_str() {
        for kind in [
            GatewayKind::Reflection,
            GatewayKind::Sentiment,
            GatewayKind::Summary,
        ] {
            assert_eq!(kind.as_str().parse::<GatewayKind>().unwrap(), kind);
        }
        assert!("translate".parse::<GatewayKind>().is_err());
    }

    #[test]
    fn test_journal_record_new() {
        let owner = Uuid::new_v4();
        let record = JournalRecord::new(
            owner,
            "Had a good day",
            ProcessedEntry {
                ai_response: "Sounds lovely.".to_string(),
                mood: MoodLabel::Happy,
            },
        );

        assert_eq!(record.owner_id, owner);
        assert_eq!(record.content, "Had a good day");
        assert_eq!(record.mood, "happy");
        assert_eq!(record.mood_label(), Some(MoodLabel::Happy));
        assert_eq!(record.id.get_version_num(), 7);
    }

    #[test]
    fn test_journal_record_with_drifted_mood_deserializes() {
        let json = r#"{
            "id": "0190b0d2-7c4e-7000-8000-000000000001",
            "owner_id": "00000000-0000-0000-0000-000000000000",
            "content": "old entry",
            "ai_response": "ok",
            "mood": "anxious",
            "created_at": "2024-07-01T12:00:00Z"
        }"#;
        let record: JournalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mood, "anxious");
        assert_eq!(record.mood_label(), None);
    }

    #[test]
    fn test_insights_report_serialization() {
        let report = InsightsReport {
            mood_counts: MoodCounts {
                happy: 2,
                sad: 1,
                ..Default::default()
            },
            summary: "Mostly upbeat.".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mood_counts"]["happy"], 2);
        assert_eq!(json["mood_counts"]["neutral"], 0);
        assert_eq!(json["summary"], "Mostly upbeat.");
    }
}
