//! RecordMating command handler.
//!
//! A mating opens a new litter directly at `confirmed` and logs the mating
//! on both the dam and the litter. The dam's copy carries a reminder on the
//! expected birth date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::application::handlers::support::{commit, load_dog, primary_and_copy};
use crate::domain::fact_log::{EntityRef, Event, EventDraft, EventType};
use crate::domain::foundation::{CommandMetadata, DogId, FieldErrors, Locale};
use crate::domain::litter::{BreedingError, Litter, Mating, MatingType};
use crate::ports::{ChangeSet, EntityStore};

/// Command to record a mating between a dam and a sire.
#[derive(Debug, Clone)]
pub struct RecordMatingCommand {
    pub dam_id: DogId,
    pub sire_id: DogId,
    pub mating_date: NaiveDate,
    pub mating_type: MatingType,
    /// First day of the dam's heat, copied onto the litter.
    pub heat_start_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Result of recording a mating.
#[derive(Debug, Clone)]
pub struct RecordMatingResult {
    pub litter: Litter,
    /// The dam's mating event (carries the birth reminder).
    pub event: Event,
    /// The litter's copy of the mating event.
    pub litter_event: Event,
}

/// Handler for recording matings.
pub struct RecordMatingHandler {
    store: Arc<dyn EntityStore>,
    locale: Locale,
}

impl RecordMatingHandler {
    pub fn new(store: Arc<dyn EntityStore>, locale: Locale) -> Self {
        Self { store, locale }
    }

    pub async fn handle(
        &self,
        cmd: RecordMatingCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordMatingResult, BreedingError> {
        if cmd.dam_id == cmd.sire_id {
            return Err(BreedingError::validation(
                "sire_id",
                "Dam and sire must be different dogs",
            ));
        }

        // 1. Load both parents
        let dam = load_dog(self.store.as_ref(), &metadata, cmd.dam_id).await?;
        let sire = load_dog(self.store.as_ref(), &metadata, cmd.sire_id).await?;

        // 2. Validate sexes and dates together
        let mut errors = FieldErrors::new();
        if !dam.sex.is_female() {
            errors.add("dam_id", "Dam must be female");
        }
        if !sire.sex.is_male() {
            errors.add("sire_id", "Sire must be male");
        }
        if let Some(heat_start) = cmd.heat_start_date {
            if cmd.mating_date < heat_start {
                errors.add("mating_date", "Mating date cannot precede the heat start date");
            }
        }
        if let Err(errors) = errors.into_result() {
            warn!(
                tenant_id = %metadata.tenant_id(),
                dam_id = %dam.id,
                sire_id = %sire.id,
                error = %errors,
                "Mating rejected"
            );
            return Err(errors.into());
        }

        // 3. Open the litter
        let mating = Mating {
            date: cmd.mating_date,
            mating_type: cmd.mating_type,
            heat_start_date: cmd.heat_start_date,
            notes: cmd.notes.clone(),
        };
        let litter = Litter::from_mating(
            metadata.tenant_id().clone(),
            &dam,
            &sire,
            &mating,
            self.locale,
        );

        // 4. One canonical mating fact, fanned out to the dam and the litter
        let mut draft = EventDraft::new(EventType::Mating, cmd.mating_date)
            .with_field("litter_id", litter.id().to_string())
            .with_field("dam_id", dam.id.to_string())
            .with_field("dam_name", dam.name.clone())
            .with_field("sire_id", sire.id.to_string())
            .with_field("sire_name", sire.name.clone())
            .with_field("mating_type", cmd.mating_type.as_str())
            .with_notes(cmd.notes);
        if let Some(expected) = litter.expected_birth_date() {
            draft = draft
                .with_field("expected_birth_date", expected.to_string())
                .with_reminder(expected);
        }
        let (event, litter_event) = primary_and_copy(draft.fan_out(
            metadata.tenant_id(),
            &[EntityRef::dog(dam.id), EntityRef::litter(litter.id())],
        ))?;

        // 5. Persist litter and both events atomically
        let changes = ChangeSet::new()
            .insert_litter(litter.clone())
            .insert_events([event.clone(), litter_event.clone()]);
        commit(self.store.as_ref(), &metadata, "record_mating", changes).await?;

        info!(
            tenant_id = %metadata.tenant_id(),
            litter_id = %litter.id(),
            correlation_id = metadata.correlation_id(),
            expected_birth_date = ?litter.expected_birth_date(),
            "Mating recorded"
        );

        Ok(RecordMatingResult {
            litter,
            event,
            litter_event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{date, Kennel};
    use crate::domain::foundation::{ErrorCode, Sex};
    use crate::domain::litter::LitterStatus;

    #[tokio::test]
    async fn opens_confirmed_litter_with_expected_date() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        cmd.heat_start_date = Some(date(2024, 1, 1));
        let result = handler.handle(cmd, kennel.metadata.clone()).await.unwrap();

        assert_eq!(result.litter.status(), LitterStatus::Confirmed);
        assert_eq!(result.litter.name(), "Litter Luna x Rex");
        assert_eq!(result.litter.expected_birth_date(), Some(date(2024, 3, 13)));
        assert_eq!(result.litter.heat_start_date(), Some(date(2024, 1, 1)));
        assert_eq!(kennel.store.litter_count(kennel.tenant()), 1);
    }

    #[tokio::test]
    async fn mating_is_logged_on_dam_and_litter_with_same_payload() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let result = handler
            .handle(kennel.mating(date(2024, 1, 10)), kennel.metadata.clone())
            .await
            .unwrap();

        assert_eq!(result.event.entity(), EntityRef::dog(kennel.dam.id));
        assert_eq!(
            result.litter_event.entity(),
            EntityRef::litter(result.litter.id())
        );
        assert_eq!(result.event.payload(), result.litter_event.payload());
        assert_eq!(result.event.payload()["sire_name"], "Rex");
        assert_eq!(result.event.payload()["expected_birth_date"], "2024-03-13");
        assert_eq!(result.event.reminder_date(), Some(date(2024, 3, 13)));
        assert_eq!(result.litter_event.reminder_date(), None);
        assert_ne!(result.event.id(), result.litter_event.id());
    }

    #[tokio::test]
    async fn localized_litter_name() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::Es);

        let result = handler
            .handle(kennel.mating(date(2024, 1, 10)), kennel.metadata.clone())
            .await
            .unwrap();

        assert_eq!(result.litter.name(), "Camada Luna x Rex");
    }

    #[tokio::test]
    async fn swapped_sexes_are_reported_together() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        std::mem::swap(&mut cmd.dam_id, &mut cmd.sire_id);
        let err = handler.handle(cmd, kennel.metadata.clone()).await.unwrap_err();

        match err {
            BreedingError::Validation(errors) => {
                assert!(errors.contains("dam_id"));
                assert!(errors.contains("sire_id"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(kennel.store.litter_count(kennel.tenant()), 0);
        assert_eq!(kennel.store.event_count(kennel.tenant()), 0);
    }

    #[tokio::test]
    async fn same_dog_as_both_parents_is_rejected() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        cmd.sire_id = cmd.dam_id;
        let err = handler.handle(cmd, kennel.metadata.clone()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn mating_before_heat_is_rejected() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        cmd.heat_start_date = Some(date(2024, 1, 15));
        let err = handler.handle(cmd, kennel.metadata.clone()).await.unwrap_err();

        match err {
            BreedingError::Validation(errors) => assert!(errors.contains("mating_date")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_sire_is_not_found() {
        let kennel = Kennel::new();
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        cmd.sire_id = DogId::new();
        let err = handler.handle(cmd, kennel.metadata.clone()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DogNotFound);
    }

    #[tokio::test]
    async fn dogs_of_other_tenants_are_not_visible() {
        let kennel = Kennel::new();
        let other = crate::domain::foundation::TenantId::new("other-kennel").unwrap();
        let foreign_sire = crate::domain::dog::Dog::new(other, "Zeus", Sex::Male);
        kennel.store.insert_dog(foreign_sire.clone());
        let handler = RecordMatingHandler::new(kennel.store(), Locale::En);

        let mut cmd = kennel.mating(date(2024, 1, 10));
        cmd.sire_id = foreign_sire.id;
        let err = handler.handle(cmd, kennel.metadata.clone()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DogNotFound);
    }
}
