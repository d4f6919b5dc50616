//! Hugging Face inference API gateway.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use echo_core::defaults;
use echo_core::{AiError, AiGateway, AiResult, Error, GatewayKind, Result};

use crate::config::GatewayConfig;
use crate::prompt::InferenceRequest;

/// Longest slice of an error body kept in an [`AiError`].
const ERROR_BODY_LIMIT: usize = 200;

/// Calls slower than this are logged as slow.
const SLOW_CALL_MS: u64 = 10_000;

/// Gateway backed by the Hugging Face hosted inference API.
pub struct HuggingFaceGateway {
    client: Client,
    config: GatewayConfig,
}

impl HuggingFaceGateway {
    /// Create a gateway with the given configuration.
    ///
    /// An invalid configuration is rejected with [`Error::Config`].
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing Hugging Face gateway: url={}, reflection={}, sentiment={}, summary={}, credential={}",
            config.base_url,
            config.reflection_model,
            config.sentiment_model,
            config.summary_model,
            if config.has_api_key() { "set" } else { "missing" }
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl AiGateway for HuggingFaceGateway {
    #[instrument(skip(self, payload), fields(subsystem = "inference", component = "huggingface", op = "invoke", kind = %kind, payload_len = payload.len()))]
    async fn invoke(&self, kind: GatewayKind, payload: &str) -> AiResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("No credential configured, skipping request");
            return Err(AiError::CredentialMissing);
        };

        let start = Instant::now();
        let request = InferenceRequest::build(kind, payload, &self.config);

        let response = self
            .client
            .post(self.config.endpoint_for(kind))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::upstream(format!(
                        "Request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    AiError::upstream(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(AiError::status(status.as_u16(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiError::upstream(format!("Failed to parse response: {}", e)))?;

        let text = extract_candidate(kind, &body);
        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = text.len(),
            duration_ms = elapsed,
            model = %self.config.model_for(kind),
            "Gateway call complete"
        );
        if elapsed > SLOW_CALL_MS {
            warn!(
                duration_ms = elapsed,
                kind = %kind,
                slow = true,
                "Slow gateway call"
            );
        }
        Ok(text)
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Pull the first candidate out of an inference reply.
///
/// Generation replies look like `[{"generated_text": "..."}]`. Classification
/// replies look like `[{"label": "POSITIVE", "score": 0.99}]` or, from the
/// hosted API, `[[{"label": ...}, ...]]` sorted by score. A missing or empty
/// field yields the placeholder for `kind`.
pub fn extract_candidate(kind: GatewayKind, body: &Value) -> String {
    let mut first = body.get(0);
    if kind == GatewayKind::Sentiment {
        if let Some(Value::Array(nested)) = first {
            first = nested.first();
        }
    }

    let field = match kind {
        GatewayKind::Sentiment => "label",
        GatewayKind::Reflection | GatewayKind::Summary => "generated_text",
    };

    first
        .and_then(|candidate| candidate.get(field))
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder(kind).to_string())
}

/// Documented stand-in for a reply that lacks the expected field.
pub fn placeholder(kind: GatewayKind) -> &'static str {
    match kind {
        GatewayKind::Reflection => defaults::REFLECTION_PLACEHOLDER,
        GatewayKind::Sentiment => defaults::SENTIMENT_PLACEHOLDER,
        GatewayKind::Summary => defaults::SUMMARY_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==========================================================================
    // Response Parsing Tests
    // ==========================================================================

    #[test]
    fn test_extract_generated_text() {
        let body = json!([{"generated_text": "You sound rested."}]);
        assert_eq!(
            extract_candidate(GatewayKind::Reflection, &body),
            "You sound rested."
        );
    }

    #[test]
    fn test_extract_takes_first_candidate() {
        let body = json!([{"generated_text": "first"}, {"generated_text": "second"}]);
        assert_eq!(extract_candidate(GatewayKind::Summary, &body), "first");
    }

    #[test]
    fn test_extract_label_flat() {
        let body = json!([{"label": "NEGATIVE", "score": 0.97}]);
        assert_eq!(extract_candidate(GatewayKind::Sentiment, &body), "NEGATIVE");
    }

    #[test]
    fn test_extract_label_nested() {
        let body = json!([[
            {"label": "POSITIVE", "score": 0.91},
            {"label": "NEGATIVE", "score": 0.09}
        ]]);
        assert_eq!(extract_candidate(GatewayKind::Sentiment, &body), "POSITIVE");
    }

    #[test]
    fn test_extract_missing_field_yields_placeholder() {
        let body = json!([{"unexpected": true}]);
        assert_eq!(
            extract_candidate(GatewayKind::Reflection, &body),
            "AI reflection not available."
        );
        assert_eq!(extract_candidate(GatewayKind::Sentiment, &body), "UNKNOWN");
        assert_eq!(
            extract_candidate(GatewayKind::Summary, &body),
            "Insights summary not available."
        );
    }

    #[test]
    fn test_extract_empty_array_yields_placeholder() {
        assert_eq!(
            extract_candidate(GatewayKind::Reflection, &json!([])),
            "AI reflection not available."
        );
    }

    #[test]
    fn test_extract_non_array_yields_placeholder() {
        let body = json!({"error": "Model gpt2 is currently loading"});
        assert_eq!(extract_candidate(GatewayKind::Sentiment, &body), "UNKNOWN");
    }

    #[test]
    fn test_extract_returns_text_as_received() {
        let body = json!([{"generated_text": "  Keep going.\n"}]);
        assert_eq!(
            extract_candidate(GatewayKind::Reflection, &body),
            "  Keep going.\n"
        );

        let body = json!([{"label": "POSITIVE "}]);
        assert_eq!(extract_candidate(GatewayKind::Sentiment, &body), "POSITIVE ");
    }

    #[test]
    fn test_extract_blank_text_yields_placeholder() {
        let body = json!([{"generated_text": "   "}]);
        assert_eq!(
            extract_candidate(GatewayKind::Reflection, &body),
            "AI reflection not available."
        );
    }

    // ==========================================================================
    // Configuration Tests
    // ==========================================================================

    #[test]
    fn test_is_configured_follows_credential() {
        let gateway = HuggingFaceGateway::new(GatewayConfig::default()).unwrap();
        assert!(!gateway.is_configured());
        assert_eq!(gateway.name(), "huggingface");

        let gateway =
            HuggingFaceGateway::new(GatewayConfig::default().with_api_key("hf_test")).unwrap();
        assert!(gateway.is_configured());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GatewayConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let result = HuggingFaceGateway::new(config);
        assert!(matches!(result, Err(Error::Config(_))));

        let config = GatewayConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(
            HuggingFaceGateway::new(config),
            Err(Error::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        // Unroutable URL: reaching the network would fail differently.
        let config = GatewayConfig::default().with_base_url("http://127.0.0.1:9");
        let gateway = HuggingFaceGateway::new(config).unwrap();

        let err = gateway
            .invoke(GatewayKind::Reflection, "hello")
            .await
            .unwrap_err();
        assert_eq!(err, AiError::CredentialMissing);
    }
}
