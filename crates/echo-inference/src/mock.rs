//! Mock AI gateway for deterministic testing.
//!
//! Records every invocation so tests can assert how many outbound calls a
//! pipeline made per call purpose.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use echo_inference::mock::MockGateway;
//! use echo_core::GatewayKind;
//!
//! let gateway = MockGateway::new()
//!     .with_response(GatewayKind::Sentiment, "NEGATIVE")
//!     .with_latency_ms(20);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use echo_core::{AiError, AiGateway, AiResult, GatewayKind};

/// Mock gateway for testing.
#[derive(Clone)]
pub struct MockGateway {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    configured: bool,
    responses: HashMap<GatewayKind, String>,
    mapped: HashMap<(GatewayKind, String), String>,
    failures: HashMap<GatewayKind, u16>,
    latency_ms: u64,
}

#[derive(Debug, Clone)]
pub struct MockCall {
    pub kind: GatewayKind,
    pub payload: String,
    pub timestamp: Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        let responses = HashMap::from([
            (GatewayKind::Reflection, "Mock reflection".to_string()),
            (GatewayKind::Sentiment, "POSITIVE".to_string()),
            (GatewayKind::Summary, "Mock summary".to_string()),
        ]);
        Self {
            configured: true,
            responses,
            mapped: HashMap::new(),
            failures: HashMap::new(),
            latency_ms: 0,
        }
    }
}

impl MockGateway {
    /// Create a configured mock that answers every kind successfully.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the default answer for a call purpose.
    pub fn with_response(mut self, kind: GatewayKind, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config)
            .responses
            .insert(kind, response.into());
        self
    }

    /// Answer a specific payload for a call purpose.
    pub fn with_response_mapping(
        mut self,
        kind: GatewayKind,
        payload: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .mapped
            .insert((kind, payload.into()), response.into());
        self
    }

    /// Every call fails with the given HTTP status.
    pub fn failing_with(mut self, status: u16) -> Self {
        let config = Arc::make_mut(&mut self.config);
        for kind in [
            GatewayKind::Reflection,
            GatewayKind::Sentiment,
            GatewayKind::Summary,
        ] {
            config.failures.insert(kind, status);
        }
        self
    }

    /// Calls for one purpose fail with the given HTTP status.
    pub fn failing_for(mut self, kind: GatewayKind, status: u16) -> Self {
        Arc::make_mut(&mut self.config).failures.insert(kind, status);
        self
    }

    /// Behave as if no credential were configured.
    pub fn without_credential(mut self) -> Self {
        Arc::make_mut(&mut self.config).configured = false;
        self
    }

    /// Set simulated latency for every call.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    /// Number of invocations for one call purpose.
    pub fn call_count(&self, kind: GatewayKind) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.kind == kind)
            .count()
    }

    /// Number of invocations across all purposes.
    pub fn total_calls(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    fn log_call(&self, kind: GatewayKind, payload: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            kind,
            payload: payload.to_string(),
            timestamp: Instant::now(),
        });
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiGateway for MockGateway {
    async fn invoke(&self, kind: GatewayKind, payload: &str) -> AiResult<String> {
        self.log_call(kind, payload);

        if !self.config.configured {
            return Err(AiError::CredentialMissing);
        }

        self.simulate_latency().await;

        if let Some(status) = self.config.failures.get(&kind) {
            return Err(AiError::status(*status, "simulated failure"));
        }

        if let Some(response) = self.config.mapped.get(&(kind, payload.to_string())) {
            return Ok(response.clone());
        }

        Ok(self
            .config
            .responses
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    fn is_configured(&self) -> bool {
        self.config.configured
    }

    fn name(&self) -> &str {
        "mock"
    }
}
