//! GetLitter query handler.

use std::sync::Arc;

use crate::application::handlers::support::load_litter;
use crate::domain::foundation::{CommandMetadata, LitterId};
use crate::domain::litter::{BreedingError, Litter};
use crate::domain::puppy::Puppy;
use crate::ports::EntityStore;

/// Query for a litter and its puppies.
#[derive(Debug, Clone)]
pub struct GetLitterQuery {
    pub litter_id: LitterId,
}

/// A litter with its puppies in birth order.
#[derive(Debug, Clone)]
pub struct LitterView {
    pub litter: Litter,
    pub puppies: Vec<Puppy>,
}

pub type GetLitterResult = Result<LitterView, BreedingError>;

pub struct GetLitterHandler {
    store: Arc<dyn EntityStore>,
}

impl GetLitterHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetLitterQuery, metadata: CommandMetadata) -> GetLitterResult {
        let litter = load_litter(self.store.as_ref(), &metadata, query.litter_id).await?;
        let puppies = self
            .store
            .find_puppies_by_litter(metadata.tenant_id(), litter.id())
            .await?;

        Ok(LitterView { litter, puppies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::breeding::{RecordBirthCommand, RecordBirthHandler};
    use crate::application::handlers::test_support::{date, Kennel};
    use crate::domain::foundation::{ErrorCode, Sex};
    use crate::domain::litter::BirthType;
    use crate::domain::puppy::PuppyBirthRecord;

    #[tokio::test]
    async fn returns_puppies_in_birth_order() {
        let kennel = Kennel::new();
        let litter = kennel.mated_litter().await;
        RecordBirthHandler::new(kennel.store())
            .handle(
                RecordBirthCommand {
                    litter_id: litter.id(),
                    birth_date: date(2024, 3, 12),
                    birth_type: BirthType::Cesarean,
                    puppies: vec![
                        PuppyBirthRecord::new(Sex::Female),
                        PuppyBirthRecord::new(Sex::Male).with_identifier("Blue"),
                    ],
                    notes: None,
                },
                kennel.metadata.clone(),
            )
            .await
            .unwrap();

        let view = GetLitterHandler::new(kennel.store())
            .handle(GetLitterQuery { litter_id: litter.id() }, kennel.metadata.clone())
            .await
            .unwrap();

        assert_eq!(view.litter.birth_type(), Some(BirthType::Cesarean));
        let identifiers: Vec<&str> = view.puppies.iter().map(|p| p.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["F-1", "Blue"]);
    }

    #[tokio::test]
    async fn unknown_litter_is_not_found() {
        let kennel = Kennel::new();
        let err = GetLitterHandler::new(kennel.store())
            .handle(GetLitterQuery { litter_id: LitterId::new() }, kennel.metadata.clone())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::LitterNotFound);
    }
}
