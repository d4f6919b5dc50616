//! Core traits for echo abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AiResult, Result};
use crate::models::{GatewayKind, JournalRecord};

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// A single outbound call to an external inference endpoint.
///
/// Implementations perform at most one request per invocation and never
/// retry. A missing credential must short-circuit with
/// [`AiError::CredentialMissing`](crate::AiError::CredentialMissing) without
/// touching the network.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Invoke the endpoint selected by `kind` with `payload`, returning the
    /// first candidate's text or label.
    async fn invoke(&self, kind: GatewayKind, payload: &str) -> AiResult<String>;

    /// Whether an API credential is configured.
    fn is_configured(&self) -> bool;

    /// Name of the backend, for logging.
    fn name(&self) -> &str;
}

// =============================================================================
// JOURNAL STORAGE TRAITS
// =============================================================================

/// Storage collaborator for journal records.
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Persist a newly created record.
    async fn insert(&self, record: JournalRecord) -> Result<()>;

    /// All records belonging to `owner_id`, in no particular order.
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<JournalRecord>>;
}
