//! In-memory entity store.
//!
//! Tenant-partitioned maps behind a mutex. A commit applies its writes to a
//! copy of the tenant's partition and swaps it in only when every write
//! succeeded, so a failed commit leaves nothing behind.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::dog::{Dog, ParentFilter};
use crate::domain::fact_log::{EntityRef, Event};
use crate::domain::foundation::{
    DogId, DomainError, ErrorCode, EventId, LitterId, PuppyId, TenantId,
};
use crate::domain::litter::{Litter, LitterStatus};
use crate::domain::puppy::Puppy;
use crate::adapters::ensure_tenant;
use crate::ports::{ChangeSet, EntityStore, StoreWrite};

/// A value tagged with its insertion sequence number.
#[derive(Debug, Clone)]
struct Sequenced<T> {
    seq: u64,
    value: T,
}

#[derive(Debug, Clone, Default)]
struct Partition {
    dogs: HashMap<DogId, Sequenced<Dog>>,
    litters: HashMap<LitterId, Sequenced<Litter>>,
    puppies: HashMap<PuppyId, Sequenced<Puppy>>,
    events: HashMap<EventId, Sequenced<Event>>,
    next_seq: u64,
}

impl Partition {
    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn apply(&mut self, tenant: &TenantId, write: StoreWrite) -> Result<(), DomainError> {
        match write {
            StoreWrite::InsertLitter(litter) => {
                ensure_tenant(tenant, litter.tenant_id())?;
                if self.litters.contains_key(&litter.id()) {
                    return Err(DomainError::conflict(format!(
                        "Litter {} already exists",
                        litter.id()
                    )));
                }
                let seq = self.next_seq();
                self.litters
                    .insert(litter.id(), Sequenced { seq, value: litter });
            }
            StoreWrite::UpdateLitter {
                litter,
                expected_version,
            } => {
                let stored = self
                    .litters
                    .get_mut(&litter.id())
                    .ok_or_else(|| litter_not_found(litter.id()))?;
                if stored.value.version() != expected_version {
                    return Err(DomainError::conflict(format!(
                        "Litter {} was modified concurrently (expected version {}, found {})",
                        litter.id(),
                        expected_version,
                        stored.value.version()
                    ))
                    .with_detail("id", litter.id().to_string()));
                }
                let mut next = litter;
                next.mark_saved();
                stored.value = next;
            }
            StoreWrite::InsertPuppy(puppy) => {
                ensure_tenant(tenant, &puppy.tenant_id)?;
                if !self.litters.contains_key(&puppy.litter_id) {
                    return Err(litter_not_found(puppy.litter_id));
                }
                let duplicate = self.puppies.values().any(|p| {
                    p.value.litter_id == puppy.litter_id && p.value.identifier == puppy.identifier
                });
                if duplicate {
                    return Err(DomainError::validation(
                        "identifier",
                        format!(
                            "Identifier '{}' is already used in litter {}",
                            puppy.identifier, puppy.litter_id
                        ),
                    ));
                }
                let seq = self.next_seq();
                self.puppies.insert(puppy.id, Sequenced { seq, value: puppy });
            }
            StoreWrite::InsertEvent(event) => {
                ensure_tenant(tenant, event.tenant_id())?;
                let seq = self.next_seq();
                self.events.insert(event.id(), Sequenced { seq, value: event });
            }
            StoreWrite::CompleteReminder(id) => {
                let event = self.live_event_mut(id)?;
                event.complete_reminder()?;
            }
            StoreWrite::SoftDeleteEvent(id) => {
                let event = self.live_event_mut(id)?;
                event.soft_delete();
            }
        }
        Ok(())
    }

    fn live_event_mut(&mut self, id: EventId) -> Result<&mut Event, DomainError> {
        self.events
            .get_mut(&id)
            .map(|e| &mut e.value)
            .filter(|e| !e.is_deleted())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::EventNotFound, format!("Event not found: {}", id))
                    .with_detail("id", id.to_string())
            })
    }

    fn litters_where(&self, predicate: impl Fn(&Litter) -> bool) -> Vec<Litter> {
        let mut litters: Vec<&Sequenced<Litter>> = self
            .litters
            .values()
            .filter(|l| predicate(&l.value))
            .collect();
        litters.sort_by_key(|l| l.seq);
        litters.into_iter().map(|l| l.value.clone()).collect()
    }
}

fn litter_not_found(id: LitterId) -> DomainError {
    DomainError::new(ErrorCode::LitterNotFound, format!("Litter not found: {}", id))
        .with_detail("id", id.to_string())
}

/// In-memory [`EntityStore`] for tests and embedders.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryEntityStore::new());
/// store.insert_dog(dam.clone());
///
/// let handler = RecordMatingHandler::new(store.clone(), Locale::En);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    partitions: Mutex<HashMap<TenantId, Partition>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Commits swap whole partitions, so a poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, HashMap<TenantId, Partition>> {
        self.partitions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<T>(&self, tenant: &TenantId, f: impl FnOnce(&Partition) -> T) -> T
    where
        T: Default,
    {
        let partitions = self.lock();
        partitions.get(tenant).map(f).unwrap_or_default()
    }

    // === Seeding ===

    /// Registers a dog under its own tenant. Dogs are created outside the breeding core.
    pub fn insert_dog(&self, dog: Dog) {
        let mut partitions = self.lock();
        let partition = partitions.entry(dog.tenant_id.clone()).or_default();
        let seq = partition.next_seq();
        partition.dogs.insert(dog.id, Sequenced { seq, value: dog });
    }

    pub fn insert_dogs(&self, dogs: impl IntoIterator<Item = Dog>) {
        for dog in dogs {
            self.insert_dog(dog);
        }
    }

    /// Removes a dog, leaving any references to it dangling.
    pub fn remove_dog(&self, tenant: &TenantId, id: DogId) -> Option<Dog> {
        let mut partitions = self.lock();
        partitions
            .get_mut(tenant)
            .and_then(|p| p.dogs.remove(&id))
            .map(|d| d.value)
    }

    // === Inspection ===

    pub fn event_count(&self, tenant: &TenantId) -> usize {
        self.read(tenant, |p| p.events.len())
    }

    pub fn puppy_count(&self, tenant: &TenantId) -> usize {
        self.read(tenant, |p| p.puppies.len())
    }

    pub fn litter_count(&self, tenant: &TenantId) -> usize {
        self.read(tenant, |p| p.litters.len())
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn find_dog(&self, tenant: &TenantId, id: DogId) -> Result<Option<Dog>, DomainError> {
        Ok(self.read(tenant, |p| p.dogs.get(&id).map(|d| d.value.clone())))
    }

    async fn find_dogs_by_parent(
        &self,
        tenant: &TenantId,
        filter: ParentFilter,
    ) -> Result<Vec<Dog>, DomainError> {
        Ok(self.read(tenant, |p| {
            let mut dogs: Vec<&Sequenced<Dog>> =
                p.dogs.values().filter(|d| filter.matches(&d.value)).collect();
            dogs.sort_by_key(|d| d.seq);
            dogs.into_iter().map(|d| d.value.clone()).collect()
        }))
    }

    async fn find_litter(
        &self,
        tenant: &TenantId,
        id: LitterId,
    ) -> Result<Option<Litter>, DomainError> {
        Ok(self.read(tenant, |p| p.litters.get(&id).map(|l| l.value.clone())))
    }

    async fn find_litters_by_status(
        &self,
        tenant: &TenantId,
        status: LitterStatus,
    ) -> Result<Vec<Litter>, DomainError> {
        Ok(self.read(tenant, |p| p.litters_where(|l| l.status() == status)))
    }

    async fn find_litters_by_dam(
        &self,
        tenant: &TenantId,
        dam_id: DogId,
    ) -> Result<Vec<Litter>, DomainError> {
        Ok(self.read(tenant, |p| p.litters_where(|l| l.dam_id() == dam_id)))
    }

    async fn find_litters_by_sire(
        &self,
        tenant: &TenantId,
        sire_id: DogId,
    ) -> Result<Vec<Litter>, DomainError> {
        Ok(self.read(tenant, |p| p.litters_where(|l| l.sire_id() == sire_id)))
    }

    async fn find_puppy(
        &self,
        tenant: &TenantId,
        id: PuppyId,
    ) -> Result<Option<Puppy>, DomainError> {
        Ok(self.read(tenant, |p| p.puppies.get(&id).map(|pp| pp.value.clone())))
    }

    async fn find_puppies_by_litter(
        &self,
        tenant: &TenantId,
        litter_id: LitterId,
    ) -> Result<Vec<Puppy>, DomainError> {
        Ok(self.read(tenant, |p| {
            let mut puppies: Vec<Puppy> = p
                .puppies
                .values()
                .filter(|pp| pp.value.litter_id == litter_id)
                .map(|pp| pp.value.clone())
                .collect();
            puppies.sort_by_key(|pp| pp.birth_order);
            puppies
        }))
    }

    async fn find_event(
        &self,
        tenant: &TenantId,
        id: EventId,
    ) -> Result<Option<Event>, DomainError> {
        Ok(self.read(tenant, |p| {
            p.events
                .get(&id)
                .map(|e| e.value.clone())
                .filter(|e| !e.is_deleted())
        }))
    }

    async fn find_events_by_entity(
        &self,
        tenant: &TenantId,
        entity: EntityRef,
    ) -> Result<Vec<Event>, DomainError> {
        Ok(self.read(tenant, |p| {
            let mut events: Vec<&Sequenced<Event>> = p
                .events
                .values()
                .filter(|e| e.value.entity() == entity && !e.value.is_deleted())
                .collect();
            events.sort_by(|a, b| {
                b.value
                    .event_date()
                    .cmp(&a.value.event_date())
                    .then_with(|| b.seq.cmp(&a.seq))
            });
            events.into_iter().map(|e| e.value.clone()).collect()
        }))
    }

    async fn find_pending_reminders(
        &self,
        tenant: &TenantId,
        until: NaiveDate,
    ) -> Result<Vec<Event>, DomainError> {
        Ok(self.read(tenant, |p| {
            let mut events: Vec<&Sequenced<Event>> = p
                .events
                .values()
                .filter(|e| e.value.reminder_due_by(until))
                .collect();
            events.sort_by(|a, b| {
                a.value
                    .reminder_date()
                    .cmp(&b.value.reminder_date())
                    .then_with(|| a.seq.cmp(&b.seq))
            });
            events.into_iter().map(|e| e.value.clone()).collect()
        }))
    }

    async fn commit(&self, tenant: &TenantId, changes: ChangeSet) -> Result<(), DomainError> {
        let mut partitions = self.lock();
        let mut working = partitions.get(tenant).cloned().unwrap_or_default();

        for write in changes.into_writes() {
            working.apply(tenant, write)?;
        }

        partitions.insert(tenant.clone(), working);
        Ok(())
    }
}
