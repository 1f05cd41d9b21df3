//! Bounded recursive ancestor resolution.

use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use crate::domain::dog::Dog;
use crate::domain::foundation::{DogId, Locale, Sex, TenantId};
use crate::domain::pedigree::{
    DogSummary, Generations, ParentPair, PedigreeError, PedigreeNode,
};
use crate::ports::EntityStore;

pub(super) async fn load_subject(
    store: &dyn EntityStore,
    tenant: &TenantId,
    dog_id: DogId,
) -> Result<Dog, PedigreeError> {
    store
        .find_dog(tenant, dog_id)
        .await?
        .ok_or_else(|| PedigreeError::not_found(dog_id))
}

/// Walks the sire/dam graph up to a fixed number of generations.
///
/// An unset parent id yields no node. A parent id that does not resolve
/// yields an unknown-ancestor placeholder, and the walk stops there.
pub(super) struct AncestorResolver<'a> {
    store: &'a dyn EntityStore,
    tenant: &'a TenantId,
    locale: Locale,
    generations: Generations,
}

impl<'a> AncestorResolver<'a> {
    pub(super) fn new(
        store: &'a dyn EntityStore,
        tenant: &'a TenantId,
        locale: Locale,
        generations: Generations,
    ) -> Self {
        Self {
            store,
            tenant,
            locale,
            generations,
        }
    }

    /// Resolves the ancestors of `dog`, starting with its parents at generation 1.
    pub(super) async fn ancestors_of(&self, dog: &Dog) -> Result<ParentPair, PedigreeError> {
        self.parents_of(dog.sire_id, dog.dam_id, 1).await
    }

    // Boxed so the parents -> node -> parents recursion has a finite future type.
    fn parents_of(
        &self,
        sire_id: Option<DogId>,
        dam_id: Option<DogId>,
        generation: u8,
    ) -> BoxFuture<'_, Result<ParentPair, PedigreeError>> {
        async move {
            if generation > self.generations.get() {
                return Ok(ParentPair::default());
            }

            let sire = match sire_id {
                Some(id) => Some(Box::new(self.node(id, Sex::Male, generation).await?)),
                None => None,
            };
            let dam = match dam_id {
                Some(id) => Some(Box::new(self.node(id, Sex::Female, generation).await?)),
                None => None,
            };

            Ok(ParentPair { sire, dam })
        }
        .boxed()
    }

    async fn node(&self, id: DogId, sex: Sex, generation: u8) -> Result<PedigreeNode, PedigreeError> {
        match self.store.find_dog(self.tenant, id).await? {
            Some(dog) => {
                let parents = self
                    .parents_of(dog.sire_id, dog.dam_id, generation + 1)
                    .await?;
                Ok(PedigreeNode {
                    dog: DogSummary::from_dog(&dog),
                    generation,
                    parents,
                })
            }
            None => {
                debug!(dog_id = %id, generation, "Ancestor does not resolve, using placeholder");
                Ok(PedigreeNode {
                    dog: DogSummary::unknown(sex, self.locale),
                    generation,
                    parents: ParentPair::default(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEntityStore;

    fn tenant() -> TenantId {
        TenantId::new("kennel").unwrap()
    }

    #[tokio::test]
    async fn cyclic_graph_stops_at_generation_cap() {
        let store = InMemoryEntityStore::new();
        let mut a = Dog::new(tenant(), "A", Sex::Male);
        let mut b = Dog::new(tenant(), "B", Sex::Male);
        a.sire_id = Some(b.id);
        b.sire_id = Some(a.id);
        store.insert_dogs([a.clone(), b]);
        let tenant = tenant();
        let resolver =
            AncestorResolver::new(&store, &tenant, Locale::En, Generations::clamped(5));

        let tree = resolver.ancestors_of(&a).await.unwrap();

        let mut depth = 0;
        let mut cursor = tree.sire.as_deref();
        while let Some(node) = cursor {
            depth += 1;
            assert_eq!(node.generation, depth);
            cursor = node.parents.sire.as_deref();
        }
        assert_eq!(depth, 5);
    }

    #[tokio::test]
    async fn dangling_parent_becomes_placeholder_with_slot_sex() {
        crate::logging::init_test();
        let store = InMemoryEntityStore::new();
        let dog = Dog::new(tenant(), "Pup", Sex::Female).with_parents(None, Some(DogId::new()));
        store.insert_dog(dog.clone());
        let tenant = tenant();
        let resolver = AncestorResolver::new(&store, &tenant, Locale::Es, Generations::default());

        let tree = resolver.ancestors_of(&dog).await.unwrap();

        assert!(tree.sire.is_none());
        let dam = tree.dam.as_deref().unwrap();
        assert!(dam.dog.unknown);
        assert_eq!(dam.dog.sex, Sex::Female);
        assert_eq!(dam.dog.display_name, "Desconocido");
        assert!(dam.parents.is_empty());
    }
}
