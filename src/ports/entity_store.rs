//! Entity store port.
//!
//! The single persistence contract of the breeding core. Every method is
//! scoped to the caller's tenant; implementations must never return or touch
//! another tenant's records.
//!
//! # Design
//!
//! - **Reads** return `Ok(None)` / empty vectors for missing records; the
//!   handlers decide which absence is an error
//! - **Writes** go through [`EntityStore::commit`] so multi-record operations
//!   are all-or-nothing

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ChangeSet;
use crate::domain::dog::{Dog, ParentFilter};
use crate::domain::fact_log::{EntityRef, Event};
use crate::domain::foundation::{DogId, DomainError, EventId, LitterId, PuppyId, TenantId};
use crate::domain::litter::{Litter, LitterStatus};
use crate::domain::puppy::Puppy;

/// Tenant-scoped storage for dogs, litters, puppies and events.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_dog(&self, tenant: &TenantId, id: DogId) -> Result<Option<Dog>, DomainError>;

    /// Dogs whose sire (or dam) is the filtered dog.
    async fn find_dogs_by_parent(
        &self,
        tenant: &TenantId,
        filter: ParentFilter,
    ) -> Result<Vec<Dog>, DomainError>;

    async fn find_litter(
        &self,
        tenant: &TenantId,
        id: LitterId,
    ) -> Result<Option<Litter>, DomainError>;

    async fn find_litters_by_status(
        &self,
        tenant: &TenantId,
        status: LitterStatus,
    ) -> Result<Vec<Litter>, DomainError>;

    async fn find_litters_by_dam(
        &self,
        tenant: &TenantId,
        dam_id: DogId,
    ) -> Result<Vec<Litter>, DomainError>;

    async fn find_litters_by_sire(
        &self,
        tenant: &TenantId,
        sire_id: DogId,
    ) -> Result<Vec<Litter>, DomainError>;

    async fn find_puppy(&self, tenant: &TenantId, id: PuppyId)
        -> Result<Option<Puppy>, DomainError>;

    /// Puppies of a litter ordered by birth order.
    async fn find_puppies_by_litter(
        &self,
        tenant: &TenantId,
        litter_id: LitterId,
    ) -> Result<Vec<Puppy>, DomainError>;

    /// Finds a non-deleted event.
    async fn find_event(&self, tenant: &TenantId, id: EventId)
        -> Result<Option<Event>, DomainError>;

    /// Non-deleted events of one owner, newest event date first.
    ///
    /// Events sharing a date are returned most recently inserted first.
    async fn find_events_by_entity(
        &self,
        tenant: &TenantId,
        entity: EntityRef,
    ) -> Result<Vec<Event>, DomainError>;

    /// Open, non-deleted reminders due on or before `until`, earliest first.
    async fn find_pending_reminders(
        &self,
        tenant: &TenantId,
        until: NaiveDate,
    ) -> Result<Vec<Event>, DomainError>;

    /// Applies every write of the change set atomically.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a guarded litter update finds a different version, or
    ///   the store detects a concurrent write
    /// - `LitterNotFound` / `EventNotFound` if an updated record is missing
    /// - `ValidationFailed` if a puppy identifier is already used in its litter
    /// - `DatabaseError` on any other storage failure
    async fn commit(&self, tenant: &TenantId, changes: ChangeSet) -> Result<(), DomainError>;
}
