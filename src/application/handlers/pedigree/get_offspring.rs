//! GetOffspring query handler.

use std::sync::Arc;

use super::ancestor_resolver::load_subject;
use crate::domain::dog::{by_birth_date_desc, Dog, ParentFilter};
use crate::domain::foundation::{CommandMetadata, DogId};
use crate::domain::pedigree::PedigreeError;
use crate::ports::EntityStore;

#[derive(Debug, Clone)]
pub struct GetOffspringQuery {
    pub dog_id: DogId,
}

/// Children of the dog, youngest first.
pub type GetOffspringResult = Result<Vec<Dog>, PedigreeError>;

/// Lists dogs sired by a male or whelped by a female.
pub struct GetOffspringHandler {
    store: Arc<dyn EntityStore>,
}

impl GetOffspringHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetOffspringQuery, metadata: CommandMetadata) -> GetOffspringResult {
        let tenant = metadata.tenant_id();
        let dog = load_subject(self.store.as_ref(), tenant, query.dog_id).await?;

        let mut offspring = self
            .store
            .find_dogs_by_parent(tenant, ParentFilter::offspring_of(&dog))
            .await?;
        offspring.sort_by(by_birth_date_desc);

        Ok(offspring)
    }
}
