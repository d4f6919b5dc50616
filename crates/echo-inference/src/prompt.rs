//! Prompt templates and request bodies for each gateway call purpose.

use serde::Serialize;

use crate::config::GatewayConfig;
use echo_core::GatewayKind;

/// Reflection prompt for a journal entry.
pub fn reflection_prompt(entry: &str) -> String {
    format!(
        "Reflect on this journal entry: {}. Provide a short, thoughtful response.",
        entry
    )
}

/// Summary prompt for a mood distribution such as `happy: 2, sad: 1, ...`.
pub fn summary_prompt(mood_summary: &str) -> String {
    format!(
        "Based on mood counts: {}. Provide a short summary of the user's emotional state.",
        mood_summary
    )
}

/// Generation parameters sent alongside text-generation prompts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f32,
}

/// Request payload for the inference endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InferenceRequest {
    pub inputs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<GenerationParameters>,
}

impl InferenceRequest {
    /// Build the request for `kind`. Sentiment sends the raw text; the
    /// generation kinds wrap the payload in their template.
    pub fn build(kind: GatewayKind, payload: &str, config: &GatewayConfig) -> Self {
        match kind {
            GatewayKind::Reflection => Self {
                inputs: reflection_prompt(payload),
                parameters: Some(GenerationParameters {
                    max_length: config.reflection_max_length,
                    temperature: config.temperature,
                }),
            },
            GatewayKind::Sentiment => Self {
                inputs: payload.to_string(),
                parameters: None,
            },
            GatewayKind::Summary => Self {
                inputs: summary_prompt(payload),
                parameters: Some(GenerationParameters {
                    max_length: config.summary_max_length,
                    temperature: config.temperature,
                }),
            },
        }
    }
}
