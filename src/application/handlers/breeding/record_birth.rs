//! RecordBirth command handler.
//!
//! Records a whelping as one atomic unit: the litter update, every puppy,
//! the birth-weight weighings and the fanned-out birth events are committed
//! together or not at all.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::application::handlers::support::{commit, load_litter, primary_and_copy};
use crate::domain::fact_log::{EntityRef, Event, EventDraft, EventType};
use crate::domain::foundation::{CommandMetadata, LitterId};
use crate::domain::litter::{BirthType, BreedingError, Litter};
use crate::domain::puppy::{
    create_puppies, validate_birth_batch, BirthTally, Puppy, PuppyBirthRecord,
};
use crate::ports::{ChangeSet, EntityStore};

/// Command to record the birth of a litter.
///
/// Puppies are listed in birth order.
#[derive(Debug, Clone)]
pub struct RecordBirthCommand {
    pub litter_id: LitterId,
    pub birth_date: NaiveDate,
    pub birth_type: BirthType,
    pub puppies: Vec<PuppyBirthRecord>,
    pub notes: Option<String>,
}

/// Result of recording a birth.
#[derive(Debug, Clone)]
pub struct RecordBirthResult {
    pub litter: Litter,
    /// Created puppies in birth order.
    pub puppies: Vec<Puppy>,
    /// The litter's birth event.
    pub event: Event,
    pub dam_event: Event,
    /// One birth-weight weighing per puppy that was weighed.
    pub weighing_events: Vec<Event>,
}

/// Handler for recording births.
pub struct RecordBirthHandler {
    store: Arc<dyn EntityStore>,
}

impl RecordBirthHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordBirthCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordBirthResult, BreedingError> {
        let tenant = metadata.tenant_id();

        // 1. Load the litter and check it can still whelp
        let mut litter = load_litter(self.store.as_ref(), &metadata, cmd.litter_id).await?;
        if let Err(err) = litter.ensure_can_record_birth() {
            warn!(
                litter_id = %litter.id(),
                status = %litter.status(),
                "Birth rejected"
            );
            return Err(err.into());
        }

        // 2. Validate the batch
        validate_birth_batch(&cmd.puppies, cmd.birth_date, litter.mating_date())?;

        // 3. Create puppies in input order and tally them
        let puppies = create_puppies(tenant, litter.id(), &cmd.puppies);
        let tally = BirthTally::from_records(&cmd.puppies);
        litter.record_birth(cmd.birth_date, cmd.birth_type, &tally)?;

        // 4. Birth weights become weighing events on each puppy
        let weighing_events: Vec<Event> = puppies
            .iter()
            .filter_map(|puppy| {
                let grams = puppy.birth_weight?;
                Some(
                    EventDraft::new(EventType::Weighing, cmd.birth_date)
                        .with_field("type", "birth_weight")
                        .with_field("weight", grams)
                        .with_field("weight_unit", "g")
                        .record_on(tenant, EntityRef::puppy(puppy.id)),
                )
            })
            .collect();

        // 5. One canonical birth fact, fanned out to the litter and the dam
        let (dam_name, sire_name) = self.parent_names(&litter, &metadata).await?;
        let draft = EventDraft::new(EventType::Birth, cmd.birth_date)
            .with_field("litter_id", litter.id().to_string())
            .with_field("litter_name", litter.name())
            .with_field("dam_id", litter.dam_id().to_string())
            .with_field("dam_name", dam_name)
            .with_field("sire_id", litter.sire_id().to_string())
            .with_field("sire_name", sire_name)
            .with_field("birth_type", cmd.birth_type.as_str())
            .with_field("total", tally.total)
            .with_field("alive", tally.alive)
            .with_field("males", tally.males)
            .with_field("females", tally.females)
            .with_notes(cmd.notes);
        let (event, dam_event) = primary_and_copy(draft.fan_out(
            tenant,
            &[EntityRef::litter(litter.id()), EntityRef::dog(litter.dam_id())],
        ))?;

        // 6. Persist everything in one commit
        let changes = ChangeSet::new()
            .update_litter(litter.clone())
            .insert_puppies(puppies.clone())
            .insert_events(weighing_events.iter().cloned())
            .insert_events([event.clone(), dam_event.clone()]);
        commit(self.store.as_ref(), &metadata, "record_birth", changes).await?;
        litter.mark_saved();

        info!(
            tenant_id = %tenant,
            litter_id = %litter.id(),
            correlation_id = metadata.correlation_id(),
            total = tally.total,
            alive = tally.alive,
            "Birth recorded"
        );

        Ok(RecordBirthResult {
            litter,
            puppies,
            event,
            dam_event,
            weighing_events,
        })
    }

    /// Names of the litter's parents, when their records still resolve.
    async fn parent_names(
        &self,
        litter: &Litter,
        metadata: &CommandMetadata,
    ) -> Result<(Option<String>, Option<String>), BreedingError> {
        let tenant = metadata.tenant_id();
        let dam = self.store.find_dog(tenant, litter.dam_id()).await?;
        let sire = self.store.find_dog(tenant, litter.sire_id()).await?;
        Ok((dam.map(|d| d.name), sire.map(|s| s.name)))
    }
}
