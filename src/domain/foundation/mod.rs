//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the kennel domain.

mod command;
mod errors;
mod ids;
mod locale;
mod sex;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, FieldErrors, ValidationError};
pub use ids::{DogId, EventId, LitterId, PuppyId, TenantId};
pub use locale::Locale;
pub use sex::Sex;
pub use state_machine::StateMachine;
pub use timestamp::{today, Timestamp};
