//! GetDogReproductionHistory query handler.

use std::sync::Arc;

use crate::application::handlers::support::load_dog;
use crate::domain::fact_log::{EntityRef, Event};
use crate::domain::foundation::{CommandMetadata, DogId};
use crate::domain::litter::{BreedingError, Litter};
use crate::ports::EntityStore;

/// Query for a dog's reproduction history.
#[derive(Debug, Clone)]
pub struct GetReproductionHistoryQuery {
    pub dog_id: DogId,
}

/// Reproductive events logged on the dog and the litters it parented.
#[derive(Debug, Clone)]
pub struct ReproductionHistory {
    /// Heat, mating, pregnancy test and birth events, newest first.
    pub events: Vec<Event>,
    /// Litters where the dog is the dam (females) or the sire (males).
    pub litters: Vec<Litter>,
}

pub type GetReproductionHistoryResult = Result<ReproductionHistory, BreedingError>;

pub struct GetReproductionHistoryHandler {
    store: Arc<dyn EntityStore>,
}

impl GetReproductionHistoryHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetReproductionHistoryQuery,
        metadata: CommandMetadata,
    ) -> GetReproductionHistoryResult {
        let tenant = metadata.tenant_id();
        let dog = load_dog(self.store.as_ref(), &metadata, query.dog_id).await?;

        let events = self
            .store
            .find_events_by_entity(tenant, EntityRef::dog(dog.id))
            .await?
            .into_iter()
            .filter(|event| event.event_type().is_reproductive())
            .collect();

        let litters = if dog.sex.is_female() {
            self.store.find_litters_by_dam(tenant, dog.id).await?
        } else {
            self.store.find_litters_by_sire(tenant, dog.id).await?
        };

        Ok(ReproductionHistory { events, litters })
    }
}
