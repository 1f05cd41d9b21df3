//! Command infrastructure for handlers.
//!
//! `CommandMetadata` is the caller context that flows through every command
//! and query handler. It carries the authenticated tenant, so tenant scoping
//! never depends on anything inside a command payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TenantId;

/// Metadata context for command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The breeder whose records the command may read and write.
    pub tenant_id: TenantId,

    /// Links related operations across a single caller request.
    correlation_id: String,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "cli", "import").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates command metadata for a tenant with a fresh correlation ID.
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            correlation_id: Uuid::new_v4().to_string(),
            trace_id: None,
            source: None,
        }
    }

    /// Builder: Use a caller-supplied correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture for the tenant "test-kennel".
    pub fn test_fixture() -> Self {
        Self::new(TenantId::new("test-kennel").unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_correlation_id_once() {
        let metadata = CommandMetadata::new(TenantId::new("kennel").unwrap());

        assert!(!metadata.correlation_id().is_empty());
        assert_eq!(metadata.correlation_id(), metadata.correlation_id());
        assert!(metadata.trace_id().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(TenantId::new("kennel").unwrap())
            .with_correlation_id("corr-123")
            .with_trace_id("trace-456")
            .with_source("api");

        assert_eq!(metadata.tenant_id().as_str(), "kennel");
        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.trace_id(), Some("trace-456"));
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn serialization_skips_none_fields() {
        let metadata = CommandMetadata::new(TenantId::new("kennel").unwrap());

        let json = serde_json::to_string(&metadata).unwrap();

        assert!(json.contains("tenant_id"));
        assert!(json.contains("correlation_id"));
        assert!(!json.contains("trace_id"));
        assert!(!json.contains("source"));
    }

    #[test]
    fn serialization_round_trip() {
        let metadata = CommandMetadata::test_fixture().with_trace_id("t-1");

        let json = serde_json::to_string(&metadata).unwrap();
        let restored: CommandMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(metadata, restored);
    }
}
