//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory entity store (tests, embedding)
//! - `postgres` - PostgreSQL entity store

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEntityStore;
pub use postgres::PostgresEntityStore;

use crate::domain::foundation::{DomainError, TenantId};

/// Rejects a record whose owner differs from the committing tenant.
pub(crate) fn ensure_tenant(expected: &TenantId, actual: &TenantId) -> Result<(), DomainError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DomainError::validation(
            "tenant_id",
            format!("Record belongs to tenant '{}', not '{}'", actual, expected),
        ))
    }
}
