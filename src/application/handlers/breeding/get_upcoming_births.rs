//! GetUpcomingBirths query handler.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{today, CommandMetadata};
use crate::domain::litter::{falls_within, BreedingError, Litter, LitterStatus};
use crate::ports::EntityStore;

/// Query for litters due within the next `days` days.
#[derive(Debug, Clone)]
pub struct GetUpcomingBirthsQuery {
    pub days: u32,
    /// Pins "today"; defaults to the current UTC date.
    pub as_of: Option<NaiveDate>,
}

/// Litters awaiting birth, soonest due first.
pub type GetUpcomingBirthsResult = Result<Vec<Litter>, BreedingError>;

pub struct GetUpcomingBirthsHandler {
    store: Arc<dyn EntityStore>,
}

impl GetUpcomingBirthsHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetUpcomingBirthsQuery,
        metadata: CommandMetadata,
    ) -> GetUpcomingBirthsResult {
        let tenant = metadata.tenant_id();
        let as_of = query.as_of.unwrap_or_else(today);

        let mut litters = Vec::new();
        for status in [LitterStatus::Pregnant, LitterStatus::Confirmed] {
            litters.extend(self.store.find_litters_by_status(tenant, status).await?);
        }

        litters.retain(|litter| {
            litter
                .expected_birth_date()
                .is_some_and(|due| falls_within(due, as_of, query.days))
        });
        litters.sort_by_key(|litter| (litter.expected_birth_date(), litter.name().to_string()));

        Ok(litters)
    }
}
