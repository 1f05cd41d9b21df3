//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EntityStore` - tenant-scoped persistence of dogs, litters, puppies, events
//! - `ChangeSet` - atomic unit of work committed through the store

mod change_set;
mod entity_store;

pub use change_set::{ChangeSet, StoreWrite};
pub use entity_store::EntityStore;
pub use crate::domain::dog::ParentFilter;
