//! Sibling derivation over the sire/dam graph.

use std::collections::HashSet;

use crate::domain::dog::{by_birth_date_desc, Dog};

/// Merges the children of the subject's parents into its sibling list.
///
/// The subject itself is excluded and every dog appears once. With
/// `full_only`, only dogs sharing both recorded parents are kept. The result
/// is ordered youngest first.
pub fn merge_siblings<I>(subject: &Dog, candidates: I, full_only: bool) -> Vec<Dog>
where
    I: IntoIterator<Item = Dog>,
{
    let mut seen = HashSet::new();
    let mut siblings: Vec<Dog> = candidates
        .into_iter()
        .filter(|dog| dog.id != subject.id)
        .filter(|dog| !full_only || dog.shares_both_parents_with(subject))
        .filter(|dog| seen.insert(dog.id))
        .collect();

    siblings.sort_by(by_birth_date_desc);
    siblings
}
