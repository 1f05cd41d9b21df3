//! Pedigree handlers: ancestor trees and kinship queries. All read-only.

mod ancestor_resolver;
mod get_offspring;
mod get_pedigree;
mod get_pedigree_flat;
mod get_siblings;

pub use get_offspring::{GetOffspringHandler, GetOffspringQuery, GetOffspringResult};
pub use get_pedigree::{GetPedigreeHandler, GetPedigreeQuery, GetPedigreeResult};
pub use get_pedigree_flat::{GetPedigreeFlatHandler, GetPedigreeFlatResult};
pub use get_siblings::{GetSiblingsHandler, GetSiblingsQuery, GetSiblingsResult};
