//! Dog module.
//!
//! Read model for the dogs that take part in matings and pedigrees.

mod dog;

pub use dog::{by_birth_date_desc, Dog, DogStatus, ParentFilter};
