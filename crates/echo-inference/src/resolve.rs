//! Cache-first gateway resolution with explicit fallback outcomes.
//!
//! Every gateway call site goes through [`CachedGateway::resolve`], which
//! yields either a genuine value or the reason a fallback is needed. Callers
//! pick the fallback value; nothing here fails outward.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use echo_core::{AiError, AiGateway, GatewayKind};

use crate::cache::ResponseCache;

/// Why genuine AI output is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No credential configured; the gateway was not called.
    CredentialMissing,
    /// The gateway call failed.
    Upstream(AiError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::CredentialMissing => f.write_str("credential_missing"),
            FallbackReason::Upstream(_) => f.write_str("upstream_failure"),
        }
    }
}

/// Outcome of resolving one gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Success(T),
    Fallback(FallbackReason),
}

impl<T> Resolved<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Success(value) => Resolved::Success(f(value)),
            Resolved::Fallback(reason) => Resolved::Fallback(reason),
        }
    }

    /// Collapse to a single value, choosing the fallback from the reason.
    pub fn or_fallback(self, f: impl FnOnce(&FallbackReason) -> T) -> T {
        match self {
            Resolved::Success(value) => value,
            Resolved::Fallback(reason) => f(&reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolved::Fallback(_))
    }
}

/// A gateway paired with the shared response cache.
#[derive(Clone)]
pub struct CachedGateway {
    gateway: Arc<dyn AiGateway>,
    cache: ResponseCache,
}

impl CachedGateway {
    pub fn new(gateway: Arc<dyn AiGateway>, cache: ResponseCache) -> Self {
        Self { gateway, cache }
    }

    /// Serve from cache, else call the gateway once and cache a genuine
    /// result. Fallbacks are never cached.
    pub async fn resolve(&self, kind: GatewayKind, payload: &str) -> Resolved<String> {
        let key = ResponseCache::key(kind, payload);
        if let Some(value) = self.cache.get(&key).await {
            return Resolved::Success(value);
        }

        if !self.gateway.is_configured() {
            debug!(kind = %kind, "No credential configured, skipping gateway");
            return Resolved::Fallback(FallbackReason::CredentialMissing);
        }

        match self.gateway.invoke(kind, payload).await {
            Ok(value) => {
                self.cache.put(key, value.clone()).await;
                Resolved::Success(value)
            }
            Err(AiError::CredentialMissing) => {
                Resolved::Fallback(FallbackReason::CredentialMissing)
            }
            Err(e) => {
                warn!(
                    kind = %kind,
                    backend = self.gateway.name(),
                    error = %e,
                    "Gateway call failed, applying fallback"
                );
                Resolved::Fallback(FallbackReason::Upstream(e))
            }
        }
    }
}
