//! CompleteReminder command handler.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::support::commit;
use crate::domain::fact_log::Event;
use crate::domain::foundation::{CommandMetadata, EventId};
use crate::domain::litter::{BreedingError, RecordKind};
use crate::ports::{ChangeSet, EntityStore};

/// Command to mark an event's reminder as done.
#[derive(Debug, Clone)]
pub struct CompleteReminderCommand {
    pub event_id: EventId,
}

/// Handler for completing reminders. Completing twice is a no-op.
pub struct CompleteReminderHandler {
    store: Arc<dyn EntityStore>,
}

impl CompleteReminderHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CompleteReminderCommand,
        metadata: CommandMetadata,
    ) -> Result<Event, BreedingError> {
        let mut event = self
            .store
            .find_event(metadata.tenant_id(), cmd.event_id)
            .await?
            .ok_or_else(|| BreedingError::not_found(RecordKind::Event, cmd.event_id))?;

        if !event.complete_reminder()? {
            return Ok(event);
        }

        commit(
            self.store.as_ref(),
            &metadata,
            "complete_reminder",
            ChangeSet::new().complete_reminder(event.id()),
        )
        .await?;

        info!(
            tenant_id = %metadata.tenant_id(),
            event_id = %event.id(),
            correlation_id = metadata.correlation_id(),
            "Reminder completed"
        );

        Ok(event)
    }
}
