//! Shared fixtures for handler tests.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::adapters::InMemoryEntityStore;
use crate::domain::dog::Dog;
use crate::domain::foundation::{CommandMetadata, Locale, Sex, TenantId};
use crate::domain::litter::{Litter, MatingType};
use crate::ports::EntityStore;

use super::breeding::{RecordMatingCommand, RecordMatingHandler};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A tenant with one breeding pair registered.
pub struct Kennel {
    pub store: Arc<InMemoryEntityStore>,
    pub metadata: CommandMetadata,
    pub dam: Dog,
    pub sire: Dog,
}

impl Kennel {
    pub fn new() -> Self {
        let metadata = CommandMetadata::test_fixture();
        let tenant = metadata.tenant_id().clone();
        let dam = Dog::new(tenant.clone(), "Luna", Sex::Female).with_breed("Border Collie");
        let sire = Dog::new(tenant, "Rex", Sex::Male).with_breed("Border Collie");

        let store = Arc::new(InMemoryEntityStore::new());
        store.insert_dogs([dam.clone(), sire.clone()]);

        Self {
            store,
            metadata,
            dam,
            sire,
        }
    }

    pub fn tenant(&self) -> &TenantId {
        self.metadata.tenant_id()
    }

    pub fn store(&self) -> Arc<dyn EntityStore> {
        self.store.clone()
    }

    pub fn add_dog(&self, name: &str, sex: Sex) -> Dog {
        let dog = Dog::new(self.tenant().clone(), name, sex);
        self.store.insert_dog(dog.clone());
        dog
    }

    pub fn mating(&self, mating_date: NaiveDate) -> RecordMatingCommand {
        RecordMatingCommand {
            dam_id: self.dam.id,
            sire_id: self.sire.id,
            mating_date,
            mating_type: MatingType::Natural,
            heat_start_date: None,
            notes: None,
        }
    }

    /// Opens a litter mated on 2024-01-10 (due 2024-03-13).
    pub async fn mated_litter(&self) -> Litter {
        RecordMatingHandler::new(self.store(), Locale::En)
            .handle(self.mating(date(2024, 1, 10)), self.metadata.clone())
            .await
            .unwrap()
            .litter
    }
}
