//! Fact-log events.
//!
//! Events are append-only. After creation only the reminder flag and the
//! soft-delete marker may change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EntityRef, EventType};
use crate::domain::foundation::{DomainError, EventId, TenantId, Timestamp};

/// Open key/value payload; its schema depends on the event type.
pub type Payload = Map<String, Value>;

/// Persistent state of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub tenant_id: TenantId,
    pub entity: EntityRef,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub payload: Payload,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_completed: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A recorded occurrence owned by exactly one dog, litter, or puppy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    record: EventRecord,
}

impl Event {
    /// Reconstitute an event from persistence (no validation).
    pub fn reconstitute(record: EventRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    pub fn into_record(self) -> EventRecord {
        self.record
    }

    pub fn id(&self) -> EventId {
        self.record.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.record.tenant_id
    }

    pub fn entity(&self) -> EntityRef {
        self.record.entity
    }

    pub fn event_type(&self) -> EventType {
        self.record.event_type
    }

    pub fn event_date(&self) -> NaiveDate {
        self.record.event_date
    }

    pub fn payload(&self) -> &Payload {
        &self.record.payload
    }

    pub fn reminder_date(&self) -> Option<NaiveDate> {
        self.record.reminder_date
    }

    pub fn reminder_completed(&self) -> bool {
        self.record.reminder_completed
    }

    pub fn notes(&self) -> Option<&str> {
        self.record.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.record.created_at
    }

    pub fn is_deleted(&self) -> bool {
        self.record.deleted_at.is_some()
    }

    /// Returns true if the reminder is set, open, and due by `until`.
    pub fn reminder_due_by(&self, until: NaiveDate) -> bool {
        !self.is_deleted()
            && !self.record.reminder_completed
            && self.record.reminder_date.map_or(false, |date| date <= until)
    }

    /// Marks the reminder done.
    ///
    /// Returns `false` when it was already completed, so callers can skip the write.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the event carries no reminder
    pub fn complete_reminder(&mut self) -> Result<bool, DomainError> {
        if self.record.reminder_date.is_none() {
            return Err(DomainError::validation(
                "reminder_date",
                format!("Event {} has no reminder", self.record.id),
            ));
        }
        if self.record.reminder_completed {
            return Ok(false);
        }
        self.record.reminder_completed = true;
        Ok(true)
    }

    /// Hides the event from timelines and reminder lists.
    pub fn soft_delete(&mut self) {
        if self.record.deleted_at.is_none() {
            self.record.deleted_at = Some(Timestamp::now());
        }
    }
}

/// One canonical event, before it is written against its owners.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    event_type: EventType,
    event_date: NaiveDate,
    payload: Payload,
    reminder_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl EventDraft {
    pub fn new(event_type: EventType, event_date: NaiveDate) -> Self {
        Self {
            event_type,
            event_date,
            payload: Payload::new(),
            reminder_date: None,
            notes: None,
        }
    }

    /// Adds a payload field. `None` values are skipped.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.payload.insert(key.to_string(), value);
        }
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn with_reminder(mut self, reminder_date: NaiveDate) -> Self {
        self.reminder_date = Some(reminder_date);
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Writes the draft against a single owner.
    pub fn record_on(&self, tenant_id: &TenantId, entity: EntityRef) -> Event {
        self.build(tenant_id, entity, self.reminder_date)
    }

    /// Writes the draft against every target, in order.
    ///
    /// Each target gets its own row with the same type, date and payload.
    /// Only the first target carries the reminder, so one occurrence never
    /// raises two reminders.
    pub fn fan_out(&self, tenant_id: &TenantId, targets: &[EntityRef]) -> Vec<Event> {
        targets
            .iter()
            .enumerate()
            .map(|(index, entity)| {
                let reminder = if index == 0 { self.reminder_date } else { None };
                self.build(tenant_id, *entity, reminder)
            })
            .collect()
    }

    fn build(&self, tenant_id: &TenantId, entity: EntityRef, reminder_date: Option<NaiveDate>) -> Event {
        Event {
            record: EventRecord {
                id: EventId::new(),
                tenant_id: tenant_id.clone(),
                entity,
                event_type: self.event_type,
                event_date: self.event_date,
                payload: self.payload.clone(),
                reminder_date,
                reminder_completed: false,
                notes: self.notes.clone(),
                created_at: Timestamp::now(),
                deleted_at: None,
            },
        }
    }
}

/// Orders events newest first: event date descending, then creation time descending.
pub fn by_event_date_desc(a: &Event, b: &Event) -> std::cmp::Ordering {
    b.event_date()
        .cmp(&a.event_date())
        .then_with(|| b.created_at().cmp(a.created_at()))
}
