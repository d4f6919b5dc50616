//! In-process response cache for gateway results.
//!
//! Entries are keyed by call purpose and exact payload, expire logically after
//! a fixed TTL, and are only ever replaced, never mutated. Stale entries are
//! ignored on lookup rather than purged; there is no background sweep and no
//! size bound. The cache lives for the lifetime of the process.
//!
//! There is no guard between a miss and the following `put`: two concurrent
//! identical requests may both miss and both call the gateway. Writes are
//! overwrite-only, so the race only costs a duplicate call.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use echo_core::defaults;
use echo_core::GatewayKind;

use crate::config::GatewayConfig;

/// A cached gateway result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub value: String,
    pub created_at: Instant,
}

impl CacheEntry {
    /// True while `now - created_at < ttl`.
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) < ttl
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Shared TTL cache. Clones share the same storage.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Arc<ResponseCacheInner>,
}

struct ResponseCacheInner {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    /// Create an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(ResponseCacheInner {
                entries: RwLock::new(HashMap::new()),
                ttl,
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
            }),
        }
    }

    /// Create an empty cache using the configured TTL.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.cache_ttl())
    }

    /// Deterministic key for a call purpose and exact payload.
    ///
    /// Identical text sent for different purposes gets distinct keys.
    pub fn key(kind: GatewayKind, payload: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        format!(
            "{}{}:{}",
            defaults::CACHE_KEY_PREFIX,
            kind,
            hex::encode(hasher.finalize())
        )
    }

    /// Get a value if present and still fresh.
    pub async fn get(&self, key: &str) -> Option<String> {
        let entries = self.inner.entries.read().await;
        let now = Instant::now();

        match entries.get(key) {
            Some(entry) if entry.is_fresh(self.inner.ttl, now) => {
                self.inner.hits.fetch_add(1, Ordering::Relaxed);
                debug!(cache_hit = true, "Cache HIT: {}", key);
                Some(entry.value.clone())
            }
            Some(_) => {
                self.inner.misses.fetch_add(1, Ordering::Relaxed);
                debug!(cache_hit = false, stale = true, "Cache STALE: {}", key);
                None
            }
            None => {
                self.inner.misses.fetch_add(1, Ordering::Relaxed);
                debug!(cache_hit = false, "Cache MISS: {}", key);
                None
            }
        }
    }

    /// Insert or replace the value for `key`, stamped with the current time.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let entry = CacheEntry {
            key: key.clone(),
            value: value.into(),
            created_at: Instant::now(),
        };
        debug!("Cache SET: {} (TTL: {}s)", key, self.inner.ttl.as_secs());
        self.inner.entries.write().await.insert(key, entry);
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.inner.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(defaults::CACHE_TTL_SECS))
    }
}
