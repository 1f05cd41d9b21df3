//! Pedigree tree view models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dog::Dog;
use crate::domain::foundation::{DogId, Locale, Sex};

// ════════════════════════════════════════════════════════════════════════════════
// Generation bounds
// ════════════════════════════════════════════════════════════════════════════════

/// Number of ancestor generations to resolve, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generations(u8);

impl Generations {
    pub const MIN: u8 = 1;
    /// Hard cap on ancestor recursion depth.
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 4;

    /// Clamps a requested depth into the supported range.
    pub fn clamped(requested: u32) -> Self {
        let clamped = requested.clamp(Self::MIN as u32, Self::MAX as u32);
        Self(clamped as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Generations {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Nodes
// ════════════════════════════════════════════════════════════════════════════════

/// The dog fields a pedigree renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogSummary {
    /// `None` for an unknown-ancestor placeholder.
    pub id: Option<DogId>,
    /// `None` for an unknown-ancestor placeholder.
    pub name: Option<String>,
    /// Name to show; the localized "Unknown" for placeholders.
    pub display_name: String,
    pub registered_name: Option<String>,
    pub registration_number: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    /// True when the ancestor was recorded but its record does not resolve.
    pub unknown: bool,
}

impl DogSummary {
    pub fn from_dog(dog: &Dog) -> Self {
        Self {
            id: Some(dog.id),
            name: Some(dog.name.clone()),
            display_name: dog.name.clone(),
            registered_name: dog.registered_name.clone(),
            registration_number: dog.registration_number.clone(),
            breed: dog.breed.clone(),
            color: dog.color.clone(),
            sex: dog.sex,
            birth_date: dog.birth_date,
            unknown: false,
        }
    }

    /// Placeholder for a parent id that does not resolve.
    pub fn unknown(sex: Sex, locale: Locale) -> Self {
        Self {
            id: None,
            name: None,
            display_name: locale.unknown_ancestor().to_string(),
            registered_name: None,
            registration_number: None,
            breed: None,
            color: None,
            sex,
            birth_date: None,
            unknown: true,
        }
    }
}

/// Sire and dam slots of a node. An absent slot means no recorded ancestor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sire: Option<Box<PedigreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dam: Option<Box<PedigreeNode>>,
}

impl ParentPair {
    pub fn is_empty(&self) -> bool {
        self.sire.is_none() && self.dam.is_none()
    }
}

/// One ancestor in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeNode {
    pub dog: DogSummary,
    /// 1 for parents, 2 for grandparents, and so on.
    pub generation: u8,
    pub parents: ParentPair,
}

/// Ancestor tree of a dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pedigree {
    pub dog: DogSummary,
    /// The subject's parents; each carries its own parents recursively.
    pub tree: ParentPair,
    pub generations: Generations,
}

impl Pedigree {
    /// Deepest generation actually present in the tree.
    pub fn depth(&self) -> u8 {
        fn node_depth(node: &PedigreeNode) -> u8 {
            let sire = node.parents.sire.as_deref().map_or(0, node_depth);
            let dam = node.parents.dam.as_deref().map_or(0, node_depth);
            node.generation.max(sire).max(dam)
        }

        let sire = self.tree.sire.as_deref().map_or(0, node_depth);
        let dam = self.tree.dam.as_deref().map_or(0, node_depth);
        sire.max(dam)
    }
}
