//! DeleteEvent command handler.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::support::commit;
use crate::domain::foundation::{CommandMetadata, EventId};
use crate::domain::litter::{BreedingError, RecordKind};
use crate::ports::{ChangeSet, EntityStore};

/// Command to soft-delete an event.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
}

/// Handler for deleting events. Deleted events drop out of every timeline.
pub struct DeleteEventHandler {
    store: Arc<dyn EntityStore>,
}

impl DeleteEventHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteEventCommand,
        metadata: CommandMetadata,
    ) -> Result<(), BreedingError> {
        let event = self
            .store
            .find_event(metadata.tenant_id(), cmd.event_id)
            .await?
            .ok_or_else(|| BreedingError::not_found(RecordKind::Event, cmd.event_id))?;

        commit(
            self.store.as_ref(),
            &metadata,
            "delete_event",
            ChangeSet::new().soft_delete_event(event.id()),
        )
        .await?;

        info!(
            tenant_id = %metadata.tenant_id(),
            event_id = %event.id(),
            entity = %event.entity(),
            correlation_id = metadata.correlation_id(),
            "Event deleted"
        );

        Ok(())
    }
}
