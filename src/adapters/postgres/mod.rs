//! PostgreSQL adapters - Database implementations for the entity store port.
//!
//! - `PostgresEntityStore` - tenant-scoped, transactional commits, versioned litters

mod postgres_store;

pub use postgres_store::PostgresEntityStore;
