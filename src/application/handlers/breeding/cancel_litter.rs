//! CancelLitter command handler.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::support::{commit, load_litter};
use crate::domain::foundation::{CommandMetadata, LitterId};
use crate::domain::litter::{BreedingError, Litter};
use crate::ports::{ChangeSet, EntityStore};

/// Command to cancel a litter.
#[derive(Debug, Clone)]
pub struct CancelLitterCommand {
    pub litter_id: LitterId,
    /// Replaces the litter notes when not blank.
    pub reason: String,
}

/// Handler for cancelling litters. Cancellation is allowed from any status.
pub struct CancelLitterHandler {
    store: Arc<dyn EntityStore>,
}

impl CancelLitterHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CancelLitterCommand,
        metadata: CommandMetadata,
    ) -> Result<Litter, BreedingError> {
        let mut litter = load_litter(self.store.as_ref(), &metadata, cmd.litter_id).await?;
        let previous = litter.status();

        litter.cancel(&cmd.reason);
        commit(
            self.store.as_ref(),
            &metadata,
            "cancel_litter",
            ChangeSet::new().update_litter(litter.clone()),
        )
        .await?;
        litter.mark_saved();

        info!(
            tenant_id = %metadata.tenant_id(),
            litter_id = %litter.id(),
            correlation_id = metadata.correlation_id(),
            previous_status = %previous,
            "Litter cancelled"
        );

        Ok(litter)
    }
}
