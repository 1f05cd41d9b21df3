//! GetPedigree query handler.

use std::sync::Arc;

use tracing::debug;

use super::ancestor_resolver::{load_subject, AncestorResolver};
use crate::domain::foundation::{CommandMetadata, DogId, Locale};
use crate::domain::pedigree::{DogSummary, Generations, Pedigree, PedigreeError};
use crate::ports::EntityStore;

/// Query for a dog's ancestor tree.
#[derive(Debug, Clone)]
pub struct GetPedigreeQuery {
    pub dog_id: DogId,
    /// Requested depth; clamped into `[1, 5]`. `None` uses the handler default.
    pub generations: Option<u32>,
}

pub type GetPedigreeResult = Result<Pedigree, PedigreeError>;

/// Handler for pedigree trees. Read-only.
pub struct GetPedigreeHandler {
    store: Arc<dyn EntityStore>,
    locale: Locale,
    default_generations: Generations,
}

impl GetPedigreeHandler {
    pub fn new(store: Arc<dyn EntityStore>, locale: Locale) -> Self {
        Self {
            store,
            locale,
            default_generations: Generations::default(),
        }
    }

    pub fn with_default_generations(mut self, generations: Generations) -> Self {
        self.default_generations = generations;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub async fn handle(&self, query: GetPedigreeQuery, metadata: CommandMetadata) -> GetPedigreeResult {
        let tenant = metadata.tenant_id();
        let generations = query
            .generations
            .map(Generations::clamped)
            .unwrap_or(self.default_generations);

        let dog = load_subject(self.store.as_ref(), tenant, query.dog_id).await?;
        let tree = AncestorResolver::new(self.store.as_ref(), tenant, self.locale, generations)
            .ancestors_of(&dog)
            .await?;

        debug!(
            dog_id = %dog.id,
            generations = generations.get(),
            correlation_id = metadata.correlation_id(),
            "Pedigree resolved"
        );

        Ok(Pedigree {
            dog: DogSummary::from_dog(&dog),
            tree,
            generations,
        })
    }
}
