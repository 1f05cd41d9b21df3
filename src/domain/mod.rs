//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `dog` - Dog read model and sire/dam lookups
//! - `litter` - Litter aggregate, breeding lifecycle state machine, gestation
//! - `puppy` - Puppies and birth-batch creation
//! - `fact_log` - Append-only events and fan-out
//! - `pedigree` - Ancestor trees, flattening, sibling derivation

pub mod dog;
pub mod fact_log;
pub mod foundation;
pub mod litter;
pub mod pedigree;
pub mod puppy;
