//! ConfirmPregnancy command handler.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::application::handlers::support::{commit, load_litter, primary_and_copy};
use crate::domain::fact_log::{EntityRef, Event, EventDraft, EventType};
use crate::domain::foundation::{CommandMetadata, LitterId};
use crate::domain::litter::{BreedingError, Litter, PregnancyTestMethod};
use crate::ports::{ChangeSet, EntityStore};

/// Command to record a positive pregnancy test for a litter.
#[derive(Debug, Clone)]
pub struct ConfirmPregnancyCommand {
    pub litter_id: LitterId,
    pub confirmation_date: NaiveDate,
    pub method: PregnancyTestMethod,
    pub notes: Option<String>,
}

/// Result of confirming a pregnancy.
#[derive(Debug, Clone)]
pub struct ConfirmPregnancyResult {
    pub litter: Litter,
    /// The litter's pregnancy test event.
    pub event: Event,
    /// The dam's copy of the event.
    pub dam_event: Event,
}

/// Handler for pregnancy confirmation.
///
/// A pregnant litter may be confirmed again; each confirmation writes new
/// events and replaces the confirmation date.
pub struct ConfirmPregnancyHandler {
    store: Arc<dyn EntityStore>,
}

impl ConfirmPregnancyHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPregnancyCommand,
        metadata: CommandMetadata,
    ) -> Result<ConfirmPregnancyResult, BreedingError> {
        // 1. Load
        let mut litter = load_litter(self.store.as_ref(), &metadata, cmd.litter_id).await?;

        // 2. Transition
        if let Err(err) = litter.confirm_pregnancy(cmd.confirmation_date, cmd.method) {
            warn!(
                litter_id = %litter.id(),
                status = %litter.status(),
                "Pregnancy confirmation rejected"
            );
            return Err(err.into());
        }

        // 3. Fan the test result out to the litter and the dam
        let draft = EventDraft::new(EventType::PregnancyTest, cmd.confirmation_date)
            .with_field("litter_id", litter.id().to_string())
            .with_field("result", "positive")
            .with_field("method", cmd.method.as_str())
            .with_field(
                "expected_birth_date",
                litter.expected_birth_date().map(|d| d.to_string()),
            )
            .with_notes(cmd.notes);
        let (event, dam_event) = primary_and_copy(draft.fan_out(
            metadata.tenant_id(),
            &[EntityRef::litter(litter.id()), EntityRef::dog(litter.dam_id())],
        ))?;

        // 4. Persist
        let changes = ChangeSet::new()
            .update_litter(litter.clone())
            .insert_events([event.clone(), dam_event.clone()]);
        commit(self.store.as_ref(), &metadata, "confirm_pregnancy", changes).await?;
        litter.mark_saved();

        info!(
            tenant_id = %metadata.tenant_id(),
            litter_id = %litter.id(),
            correlation_id = metadata.correlation_id(),
            "Pregnancy confirmed"
        );

        Ok(ConfirmPregnancyResult {
            litter,
            event,
            dam_event,
        })
    }
}
