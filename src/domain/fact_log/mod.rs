//! Fact log - append-only events tagged to one dog, litter, or puppy.
//!
//! Lifecycle operations build one [`EventDraft`] per occurrence and write it
//! against every affected owner with [`EventDraft::fan_out`].

mod event;
mod event_type;

pub use event::{by_event_date_desc, Event, EventDraft, EventRecord, Payload};
pub use event_type::{EntityRef, EntityType, EventType};
