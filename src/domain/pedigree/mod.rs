//! Pedigree module - bounded ancestor trees and kinship over the sire/dam graph.
//!
//! Recursion depth is capped at [`Generations::MAX`]; that cap is what keeps a
//! cyclic sire/dam graph from looping, no visited-set is kept.

mod errors;
mod flat;
mod kinship;
mod tree;

pub use errors::PedigreeError;
pub use flat::{AncestorRecord, FlatPedigree};
pub use kinship::merge_siblings;
pub use tree::{DogSummary, Generations, ParentPair, Pedigree, PedigreeNode};
