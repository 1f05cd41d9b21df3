//! Lookups and commits shared by the command handlers.

use tracing::{error, warn};

use crate::domain::dog::Dog;
use crate::domain::fact_log::Event;
use crate::domain::foundation::{CommandMetadata, DogId, LitterId};
use crate::domain::litter::{BreedingError, Litter, RecordKind};
use crate::ports::{ChangeSet, EntityStore};

pub(crate) async fn load_dog(
    store: &dyn EntityStore,
    metadata: &CommandMetadata,
    id: DogId,
) -> Result<Dog, BreedingError> {
    store
        .find_dog(metadata.tenant_id(), id)
        .await?
        .ok_or_else(|| BreedingError::not_found(RecordKind::Dog, id))
}

pub(crate) async fn load_litter(
    store: &dyn EntityStore,
    metadata: &CommandMetadata,
    id: LitterId,
) -> Result<Litter, BreedingError> {
    store
        .find_litter(metadata.tenant_id(), id)
        .await?
        .ok_or_else(|| BreedingError::not_found(RecordKind::Litter, id))
}

/// Commits a change set, logging conflicts and storage failures.
pub(crate) async fn commit(
    store: &dyn EntityStore,
    metadata: &CommandMetadata,
    operation: &'static str,
    changes: ChangeSet,
) -> Result<(), BreedingError> {
    store
        .commit(metadata.tenant_id(), changes)
        .await
        .map_err(|err| {
            let err = BreedingError::from(err);
            if err.is_retryable() {
                warn!(
                    operation,
                    tenant_id = %metadata.tenant_id(),
                    correlation_id = metadata.correlation_id(),
                    error = %err,
                    "Write rejected by concurrent update"
                );
            } else {
                error!(
                    operation,
                    tenant_id = %metadata.tenant_id(),
                    correlation_id = metadata.correlation_id(),
                    error = %err,
                    "Write failed"
                );
            }
            err
        })
}

/// Splits a two-target fan-out into its primary and secondary rows.
pub(crate) fn primary_and_copy(events: Vec<Event>) -> Result<(Event, Event), BreedingError> {
    let [primary, copy]: [Event; 2] = events.try_into().map_err(|events: Vec<Event>| {
        BreedingError::Store(format!("expected 2 fanned-out events, got {}", events.len()))
    })?;
    Ok((primary, copy))
}
