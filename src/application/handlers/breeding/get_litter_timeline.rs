//! GetLitterTimeline query handler.

use std::sync::Arc;

use crate::application::handlers::support::load_litter;
use crate::domain::fact_log::{EntityRef, Event};
use crate::domain::foundation::{CommandMetadata, LitterId};
use crate::domain::litter::BreedingError;
use crate::ports::EntityStore;

/// Query for the events logged on a litter.
#[derive(Debug, Clone)]
pub struct GetLitterTimelineQuery {
    pub litter_id: LitterId,
}

/// Events newest first; soft-deleted events are excluded.
pub type GetLitterTimelineResult = Result<Vec<Event>, BreedingError>;

pub struct GetLitterTimelineHandler {
    store: Arc<dyn EntityStore>,
}

impl GetLitterTimelineHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetLitterTimelineQuery,
        metadata: CommandMetadata,
    ) -> GetLitterTimelineResult {
        let litter = load_litter(self.store.as_ref(), &metadata, query.litter_id).await?;
        let events = self
            .store
            .find_events_by_entity(metadata.tenant_id(), EntityRef::litter(litter.id()))
            .await?;
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::breeding::{
        ConfirmPregnancyCommand, ConfirmPregnancyHandler,
    };
    use crate::application::handlers::test_support::{date, Kennel};
    use crate::domain::fact_log::EventType;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::litter::PregnancyTestMethod;

    #[tokio::test]
    async fn newest_event_first() {
        let kennel = Kennel::new();
        let litter = kennel.mated_litter().await;
        ConfirmPregnancyHandler::new(kennel.store())
            .handle(
                ConfirmPregnancyCommand {
                    litter_id: litter.id(),
                    confirmation_date: date(2024, 2, 5),
                    method: PregnancyTestMethod::Palpation,
                    notes: None,
                },
                kennel.metadata.clone(),
            )
            .await
            .unwrap();

        let events = GetLitterTimelineHandler::new(kennel.store())
            .handle(
                GetLitterTimelineQuery { litter_id: litter.id() },
                kennel.metadata.clone(),
            )
            .await
            .unwrap();

        let types: Vec<EventType> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, vec![EventType::PregnancyTest, EventType::Mating]);
        assert!(events
            .iter()
            .all(|e| e.entity() == EntityRef::litter(litter.id())));
    }

    #[tokio::test]
    async fn unknown_litter_is_not_found() {
        let kennel = Kennel::new();
        let err = GetLitterTimelineHandler::new(kennel.store())
            .handle(
                GetLitterTimelineQuery { litter_id: LitterId::new() },
                kennel.metadata.clone(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::LitterNotFound);
    }
}
