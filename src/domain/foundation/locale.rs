//! Localized labels shown to breeders.
//!
//! Litter names, pedigree role labels and the unknown-ancestor name are
//! produced here so every handler renders them the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Sex;

/// Language used for generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Display name of an ancestor whose record could not be resolved.
    pub fn unknown_ancestor(&self) -> &'static str {
        match self {
            Locale::En => "Unknown",
            Locale::Es => "Desconocido",
        }
    }

    /// Generated name for a litter created by a mating.
    pub fn litter_name(&self, dam_name: &str, sire_name: &str) -> String {
        match self {
            Locale::En => format!("Litter {} x {}", dam_name, sire_name),
            Locale::Es => format!("Camada {} x {}", dam_name, sire_name),
        }
    }

    /// Role label of an ancestor, e.g. "Grandmother" for a generation-2 female.
    pub fn ancestor_role(&self, generation: u8, sex: Sex) -> String {
        let (male, female) = match (self, generation) {
            (Locale::En, 1) => ("Father", "Mother"),
            (Locale::En, 2) => ("Grandfather", "Grandmother"),
            (Locale::En, 3) => ("Great-grandfather", "Great-grandmother"),
            (Locale::En, 4) => ("Great-great-grandfather", "Great-great-grandmother"),
            (Locale::En, 5) => ("Great-great-great-grandfather", "Great-great-great-grandmother"),
            (Locale::Es, 1) => ("Padre", "Madre"),
            (Locale::Es, 2) => ("Abuelo", "Abuela"),
            (Locale::Es, 3) => ("Bisabuelo", "Bisabuela"),
            (Locale::Es, 4) => ("Tatarabuelo", "Tatarabuela"),
            (Locale::Es, 5) => ("Trastatarabuelo", "Trastatarabuela"),
            (Locale::En, _) => ("Ancestor", "Ancestor"),
            (Locale::Es, _) => ("Ancestro", "Ancestra"),
        };
        match sex {
            Sex::Male => male.to_string(),
            Sex::Female => female.to_string(),
        }
    }

    /// Collective noun for a generation, e.g. "Grandparents" for generation 2.
    pub fn generation_label(&self, generation: u8) -> String {
        let label = match (self, generation) {
            (Locale::En, 1) => "Parents",
            (Locale::En, 2) => "Grandparents",
            (Locale::En, 3) => "Great-grandparents",
            (Locale::En, 4) => "Great-great-grandparents",
            (Locale::En, 5) => "Great-great-great-grandparents",
            (Locale::Es, 1) => "Padres",
            (Locale::Es, 2) => "Abuelos",
            (Locale::Es, 3) => "Bisabuelos",
            (Locale::Es, 4) => "Tatarabuelos",
            (Locale::Es, 5) => "Trastatarabuelos",
            (Locale::En, _) => "Ancestors",
            (Locale::Es, _) => "Ancestros",
        };
        label.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Locale::En => "en",
            Locale::Es => "es",
        };
        write!(f, "{}", s)
    }
}
