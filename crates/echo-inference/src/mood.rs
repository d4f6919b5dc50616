//! Sentiment label to mood mapping.

use echo_core::MoodLabel;

/// Maps a raw sentiment label from the classifier onto the mood vocabulary.
///
/// The classifier is binary, so only `happy`, `sad` and `neutral` are ever
/// produced here; `stressed` and `calm` exist for stored entries and
/// aggregation.
pub struct MoodClassifier;

impl MoodClassifier {
    /// `"POSITIVE"` → happy, `"NEGATIVE"` → sad, anything else → neutral.
    pub fn classify(sentiment_label: &str) -> MoodLabel {
        match sentiment_label {
            "POSITIVE" => MoodLabel::Happy,
            "NEGATIVE" => MoodLabel::Sad,
            _ => MoodLabel::Neutral,
        }
    }
}
