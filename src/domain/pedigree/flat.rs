//! Flat pedigree: the tree keyed by sire/dam path codes.
//!
//! The root's sire is `S`, its dam `D`, the dam's sire `DS`, and so on. A code's
//! length is its generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DogSummary, Generations, ParentPair, Pedigree};
use crate::domain::foundation::Locale;

/// One ancestor of a flattened pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorRecord {
    pub position: String,
    pub generation: u8,
    /// Localized role, e.g. "Grandmother".
    pub role: String,
    pub dog: DogSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPedigree {
    pub dog: DogSummary,
    pub ancestors: BTreeMap<String, AncestorRecord>,
    /// Generation number to localized collective noun ("Parents", ...).
    pub generation_labels: BTreeMap<u8, String>,
    pub generations: Generations,
}

impl Pedigree {
    /// Flattens the tree into path-coded ancestor records.
    pub fn flatten(&self, locale: Locale) -> FlatPedigree {
        let mut ancestors = BTreeMap::new();
        collect(&self.tree, "", locale, &mut ancestors);

        let generation_labels = (Generations::MIN..=self.generations.get())
            .map(|generation| (generation, locale.generation_label(generation)))
            .collect();

        FlatPedigree {
            dog: self.dog.clone(),
            ancestors,
            generation_labels,
            generations: self.generations,
        }
    }
}

fn collect(
    parents: &ParentPair,
    path: &str,
    locale: Locale,
    out: &mut BTreeMap<String, AncestorRecord>,
) {
    for (code, node) in [('S', &parents.sire), ('D', &parents.dam)] {
        let Some(node) = node.as_deref() else {
            continue;
        };
        let position = format!("{}{}", path, code);
        out.insert(
            position.clone(),
            AncestorRecord {
                position: position.clone(),
                generation: node.generation,
                role: locale.ancestor_role(node.generation, node.dog.sex),
                dog: node.dog.clone(),
            },
        );
        collect(&node.parents, &position, locale, out);
    }
}
