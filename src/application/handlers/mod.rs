//! Application handlers.
//!
//! One command or query handler per operation. Handlers hold an
//! `Arc<dyn EntityStore>` and receive the caller's `CommandMetadata`, which
//! carries the tenant every read and write is scoped to.

pub mod breeding;
pub mod fact_log;
pub mod pedigree;
mod support;

#[cfg(test)]
pub(crate) mod test_support;

pub use breeding::*;
pub use fact_log::*;
pub use pedigree::*;
