//! Unit of work handed to [`EntityStore::commit`](super::EntityStore::commit).

use crate::domain::fact_log::Event;
use crate::domain::foundation::EventId;
use crate::domain::litter::Litter;
use crate::domain::puppy::Puppy;

/// A single write inside a change set.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreWrite {
    InsertLitter(Litter),
    /// Replaces the stored litter if its version still equals `expected_version`.
    UpdateLitter {
        litter: Litter,
        expected_version: u64,
    },
    InsertPuppy(Puppy),
    InsertEvent(Event),
    CompleteReminder(EventId),
    SoftDeleteEvent(EventId),
}

/// Ordered writes that must land together or not at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    writes: Vec<StoreWrite>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_litter(mut self, litter: Litter) -> Self {
        self.writes.push(StoreWrite::InsertLitter(litter));
        self
    }

    /// Queues an update guarded by the litter's current version.
    pub fn update_litter(mut self, litter: Litter) -> Self {
        let expected_version = litter.version();
        self.writes.push(StoreWrite::UpdateLitter {
            litter,
            expected_version,
        });
        self
    }

    pub fn insert_puppies(mut self, puppies: impl IntoIterator<Item = Puppy>) -> Self {
        self.writes
            .extend(puppies.into_iter().map(StoreWrite::InsertPuppy));
        self
    }

    pub fn insert_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.writes
            .extend(events.into_iter().map(StoreWrite::InsertEvent));
        self
    }

    pub fn complete_reminder(mut self, event_id: EventId) -> Self {
        self.writes.push(StoreWrite::CompleteReminder(event_id));
        self
    }

    pub fn soft_delete_event(mut self, event_id: EventId) -> Self {
        self.writes.push(StoreWrite::SoftDeleteEvent(event_id));
        self
    }

    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<StoreWrite> {
        self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dog::Dog;
    use crate::domain::foundation::{Locale, Sex, TenantId};
    use crate::domain::litter::{Mating, MatingType};
    use chrono::NaiveDate;

    fn litter() -> Litter {
        let tenant = TenantId::new("kennel").unwrap();
        let dam = Dog::new(tenant.clone(), "Luna", Sex::Female);
        let sire = Dog::new(tenant.clone(), "Rex", Sex::Male);
        let mating = Mating {
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            mating_type: MatingType::Natural,
            heat_start_date: None,
            notes: None,
        };
        Litter::from_mating(tenant, &dam, &sire, &mating, Locale::En)
    }

    #[test]
    fn update_litter_captures_current_version() {
        let mut litter = litter();
        litter.mark_saved();

        let changes = ChangeSet::new().update_litter(litter);

        match &changes.writes()[0] {
            StoreWrite::UpdateLitter {
                expected_version, ..
            } => assert_eq!(*expected_version, 1),
            other => panic!("Expected litter update, got {:?}", other),
        }
    }

    #[test]
    fn writes_keep_insertion_order() {
        let event_id = EventId::new();
        let changes = ChangeSet::new()
            .insert_litter(litter())
            .soft_delete_event(event_id)
            .complete_reminder(event_id);

        assert_eq!(changes.len(), 3);
        assert!(matches!(changes.writes()[0], StoreWrite::InsertLitter(_)));
        assert!(matches!(changes.writes()[1], StoreWrite::SoftDeleteEvent(_)));
        assert!(matches!(changes.writes()[2], StoreWrite::CompleteReminder(_)));
    }
}
