//! GetSiblings query handler.

use std::sync::Arc;

use super::ancestor_resolver::load_subject;
use crate::domain::dog::{Dog, ParentFilter};
use crate::domain::foundation::{CommandMetadata, DogId};
use crate::domain::pedigree::{merge_siblings, PedigreeError};
use crate::ports::EntityStore;

#[derive(Debug, Clone)]
pub struct GetSiblingsQuery {
    pub dog_id: DogId,
    /// Only dogs sharing both parents; otherwise half-siblings are included.
    pub full_only: bool,
}

/// Siblings, youngest first, never including the subject.
pub type GetSiblingsResult = Result<Vec<Dog>, PedigreeError>;

pub struct GetSiblingsHandler {
    store: Arc<dyn EntityStore>,
}

impl GetSiblingsHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSiblingsQuery, metadata: CommandMetadata) -> GetSiblingsResult {
        let tenant = metadata.tenant_id();
        let dog = load_subject(self.store.as_ref(), tenant, query.dog_id).await?;

        // Full siblings are a subset of the sire's children.
        let mut candidates = Vec::new();
        if let Some(sire_id) = dog.sire_id {
            candidates.extend(
                self.store
                    .find_dogs_by_parent(tenant, ParentFilter::Sire(sire_id))
                    .await?,
            );
        }
        if !query.full_only {
            if let Some(dam_id) = dog.dam_id {
                candidates.extend(
                    self.store
                        .find_dogs_by_parent(tenant, ParentFilter::Dam(dam_id))
                        .await?,
                );
            }
        }

        Ok(merge_siblings(&dog, candidates, query.full_only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{date, Kennel};
    use crate::domain::foundation::Sex;

    struct Family {
        kennel: Kennel,
        subject: Dog,
    }

    fn family() -> Family {
        let kennel = Kennel::new();
        let other_sire = kennel.add_dog("Duke", Sex::Male);
        let other_dam = kennel.add_dog("Maya", Sex::Female);
        let tenant = kennel.tenant().clone();
        let (sire, dam) = (kennel.sire.id, kennel.dam.id);

        let subject = Dog::new(tenant.clone(), "Subject", Sex::Male)
            .with_parents(Some(sire), Some(dam))
            .with_birth_date(date(2022, 1, 1));
        let full = Dog::new(tenant.clone(), "Full", Sex::Female)
            .with_parents(Some(sire), Some(dam))
            .with_birth_date(date(2021, 1, 1));
        let paternal = Dog::new(tenant.clone(), "Paternal", Sex::Male)
            .with_parents(Some(sire), Some(other_dam.id))
            .with_birth_date(date(2023, 1, 1));
        let maternal = Dog::new(tenant, "Maternal", Sex::Female)
            .with_parents(Some(other_sire.id), Some(dam))
            .with_birth_date(date(2020, 1, 1));
        kennel
            .store
            .insert_dogs([subject.clone(), full, paternal, maternal]);

        Family { kennel, subject }
    }

    async fn sibling_names(family: &Family, full_only: bool) -> Vec<String> {
        GetSiblingsHandler::new(family.kennel.store())
            .handle(
                GetSiblingsQuery {
                    dog_id: family.subject.id,
                    full_only,
                },
                family.kennel.metadata.clone(),
            )
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect()
    }

    #[tokio::test]
    async fn full_siblings_share_both_parents() {
        let family = family();
        assert_eq!(sibling_names(&family, true).await, vec!["Full"]);
    }

    #[tokio::test]
    async fn half_siblings_include_either_parent_once() {
        let family = family();
        assert_eq!(
            sibling_names(&family, false).await,
            vec!["Paternal", "Full", "Maternal"]
        );
    }
}
