//! StartHeat command handler.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::application::handlers::support::{commit, load_dog};
use crate::domain::fact_log::{EntityRef, Event, EventDraft, EventType};
use crate::domain::foundation::{CommandMetadata, DogId};
use crate::domain::litter::BreedingError;
use crate::ports::{ChangeSet, EntityStore};

/// Command to record the start of a dam's heat.
#[derive(Debug, Clone)]
pub struct StartHeatCommand {
    pub dam_id: DogId,
    pub heat_date: NaiveDate,
    pub notes: Option<String>,
}

/// Result of recording a heat.
#[derive(Debug, Clone)]
pub struct StartHeatResult {
    pub event: Event,
}

/// Handler for recording heats.
///
/// Writes one `heat` event on the dam. No litter is created.
pub struct StartHeatHandler {
    store: Arc<dyn EntityStore>,
}

impl StartHeatHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartHeatCommand,
        metadata: CommandMetadata,
    ) -> Result<StartHeatResult, BreedingError> {
        // 1. Load the dam and check she can come into heat
        let dam = load_dog(self.store.as_ref(), &metadata, cmd.dam_id).await?;
        if !dam.sex.is_female() {
            warn!(dog_id = %dam.id, "Heat rejected for a male dog");
            return Err(BreedingError::validation("dam_id", "Dam must be female"));
        }

        // 2. Record the heat on the dam
        let event = EventDraft::new(EventType::Heat, cmd.heat_date)
            .with_field("dam_name", dam.name.clone())
            .with_notes(cmd.notes)
            .record_on(metadata.tenant_id(), EntityRef::dog(dam.id));

        commit(
            self.store.as_ref(),
            &metadata,
            "start_heat",
            ChangeSet::new().insert_events([event.clone()]),
        )
        .await?;

        info!(
            tenant_id = %metadata.tenant_id(),
            dog_id = %dam.id,
            correlation_id = metadata.correlation_id(),
            "Heat recorded"
        );

        Ok(StartHeatResult { event })
    }
}
