//! GetDueReminders query handler.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::fact_log::Event;
use crate::domain::foundation::{today, CommandMetadata};
use crate::domain::litter::BreedingError;
use crate::ports::EntityStore;

/// Query for open reminders due on or before `until`.
#[derive(Debug, Clone, Default)]
pub struct GetDueRemindersQuery {
    /// Defaults to the current UTC date.
    pub until: Option<NaiveDate>,
}

/// Open reminders, earliest due first.
pub type GetDueRemindersResult = Result<Vec<Event>, BreedingError>;

pub struct GetDueRemindersHandler {
    store: Arc<dyn EntityStore>,
}

impl GetDueRemindersHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetDueRemindersQuery,
        metadata: CommandMetadata,
    ) -> GetDueRemindersResult {
        let until = query.until.unwrap_or_else(today);
        let reminders = self
            .store
            .find_pending_reminders(metadata.tenant_id(), until)
            .await?;
        Ok(reminders)
    }
}
