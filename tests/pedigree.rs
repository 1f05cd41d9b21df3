//! Integration tests for the pedigree engine.
//!
//! Builds a small multi-generation kennel in the in-memory store and checks
//! tree depth, placeholders, flattening and kinship queries.

use chrono::NaiveDate;
use std::sync::Arc;

use kennel_ledger::adapters::InMemoryEntityStore;
use kennel_ledger::application::{
    GetOffspringHandler, GetOffspringQuery, GetPedigreeFlatHandler, GetPedigreeHandler,
    GetPedigreeQuery, GetSiblingsHandler, GetSiblingsQuery,
};
use kennel_ledger::domain::dog::Dog;
use kennel_ledger::domain::foundation::{CommandMetadata, DogId, Locale, Sex, TenantId};
use kennel_ledger::domain::pedigree::{Pedigree, PedigreeError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A kennel whose `subject` has six complete generations of ancestors.
struct Lineage {
    store: Arc<InMemoryEntityStore>,
    metadata: CommandMetadata,
    subject: Dog,
}

impl Lineage {
    fn new() -> Self {
        let tenant = TenantId::new("oak-hollow").unwrap();
        let store = Arc::new(InMemoryEntityStore::new());
        let subject = Self::register(&store, &tenant, "Subject", Sex::Male, 6);
        Self {
            store,
            metadata: CommandMetadata::new(tenant),
            subject,
        }
    }

    /// Registers a dog with `depth` generations of ancestors above it.
    fn register(
        store: &InMemoryEntityStore,
        tenant: &TenantId,
        name: &str,
        sex: Sex,
        depth: u32,
    ) -> Dog {
        let mut dog = Dog::new(tenant.clone(), name, sex);
        if depth > 0 {
            let sire = Self::register(store, tenant, &format!("{}/S", name), Sex::Male, depth - 1);
            let dam = Self::register(store, tenant, &format!("{}/D", name), Sex::Female, depth - 1);
            dog = dog.with_parents(Some(sire.id), Some(dam.id));
        }
        store.insert_dog(dog.clone());
        dog
    }

    fn tree_handler(&self, locale: Locale) -> GetPedigreeHandler {
        GetPedigreeHandler::new(self.store.clone(), locale)
    }

    async fn pedigree(&self, dog_id: DogId, generations: Option<u32>) -> Result<Pedigree, PedigreeError> {
        self.tree_handler(Locale::En)
            .handle(GetPedigreeQuery { dog_id, generations }, self.metadata.clone())
            .await
    }
}

#[tokio::test]
async fn tree_depth_matches_requested_generations() {
    let lineage = Lineage::new();

    for (requested, expected) in [(1, 1), (3, 3), (5, 5), (10, 5), (0, 1)] {
        let pedigree = lineage
            .pedigree(lineage.subject.id, Some(requested))
            .await
            .unwrap();
        assert_eq!(pedigree.depth(), expected, "requested {}", requested);
        assert_eq!(pedigree.generations.get(), expected);
    }
}

#[tokio::test]
async fn full_tree_has_every_position() {
    let lineage = Lineage::new();
    let flat = GetPedigreeFlatHandler::new(lineage.tree_handler(Locale::En))
        .handle(
            GetPedigreeQuery {
                dog_id: lineage.subject.id,
                generations: Some(3),
            },
            lineage.metadata.clone(),
        )
        .await
        .unwrap();

    // 2 + 4 + 8 ancestors
    assert_eq!(flat.ancestors.len(), 14);
    assert_eq!(flat.ancestors["DS"].dog.display_name, "Subject/D/S");
    assert_eq!(flat.ancestors["DS"].role, "Grandfather");
    assert_eq!(flat.ancestors["SDD"].role, "Great-grandmother");
    assert!(flat.ancestors.values().all(|a| a.generation as usize == a.position.len()));
    assert_eq!(flat.generation_labels[&3], "Great-grandparents");
}

#[tokio::test]
async fn dog_without_parents_has_empty_tree() {
    let lineage = Lineage::new();
    let founder = Dog::new(lineage.metadata.tenant_id().clone(), "Founder", Sex::Female);
    lineage.store.insert_dog(founder.clone());

    let pedigree = lineage.pedigree(founder.id, None).await.unwrap();

    assert!(pedigree.tree.is_empty());
    assert_eq!(pedigree.depth(), 0);
    assert_eq!(pedigree.dog.display_name, "Founder");
}

#[tokio::test]
async fn missing_record_is_a_placeholder_but_unset_parent_is_absent() {
    let lineage = Lineage::new();
    let tenant = lineage.metadata.tenant_id().clone();
    let dog = Dog::new(tenant, "Rescue", Sex::Male).with_parents(Some(lineage.subject.id), None);
    lineage.store.insert_dog(dog.clone());
    let removed_grandsire = lineage.subject.sire_id.unwrap();
    lineage
        .store
        .remove_dog(lineage.metadata.tenant_id(), removed_grandsire);

    let pedigree = lineage.pedigree(dog.id, Some(2)).await.unwrap();

    assert!(pedigree.tree.dam.is_none());
    let sire = pedigree.tree.sire.as_deref().unwrap();
    assert_eq!(sire.dog.id, Some(lineage.subject.id));
    let grandsire = sire.parents.sire.as_deref().unwrap();
    assert!(grandsire.dog.unknown);
    assert_eq!(grandsire.dog.sex, Sex::Male);
    assert_eq!(grandsire.dog.display_name, "Unknown");
    assert!(grandsire.dog.id.is_none());
    let granddam = sire.parents.dam.as_deref().unwrap();
    assert!(!granddam.dog.unknown);
}

#[tokio::test]
async fn repeated_queries_are_identical() {
    let lineage = Lineage::new();

    let first = lineage.pedigree(lineage.subject.id, Some(4)).await.unwrap();
    let second = lineage.pedigree(lineage.subject.id, Some(4)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn unknown_subject_is_not_found() {
    let lineage = Lineage::new();
    let id = DogId::new();

    let err = lineage.pedigree(id, None).await.unwrap_err();

    assert_eq!(err, PedigreeError::NotFound(id));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn siblings_and_offspring_follow_the_parent_links() {
    let lineage = Lineage::new();
    let tenant = lineage.metadata.tenant_id().clone();
    let sire = lineage.subject.sire_id.unwrap();
    let dam = lineage.subject.dam_id.unwrap();
    let other_dam = Dog::new(tenant.clone(), "Other Dam", Sex::Female);
    let full = Dog::new(tenant.clone(), "Full", Sex::Female)
        .with_parents(Some(sire), Some(dam))
        .with_birth_date(date(2022, 6, 1));
    let half = Dog::new(tenant, "Half", Sex::Male)
        .with_parents(Some(sire), Some(other_dam.id))
        .with_birth_date(date(2023, 6, 1));
    lineage
        .store
        .insert_dogs([other_dam, full.clone(), half.clone()]);

    let siblings = GetSiblingsHandler::new(lineage.store.clone());
    let full_only = siblings
        .handle(
            GetSiblingsQuery {
                dog_id: lineage.subject.id,
                full_only: true,
            },
            lineage.metadata.clone(),
        )
        .await
        .unwrap();
    let all = siblings
        .handle(
            GetSiblingsQuery {
                dog_id: lineage.subject.id,
                full_only: false,
            },
            lineage.metadata.clone(),
        )
        .await
        .unwrap();

    assert_eq!(full_only, vec![full.clone()]);
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Half", "Full"]);

    let offspring = GetOffspringHandler::new(lineage.store.clone())
        .handle(GetOffspringQuery { dog_id: sire }, lineage.metadata.clone())
        .await
        .unwrap();
    let names: Vec<&str> = offspring.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Half", "Full", "Subject"]);
}
