//! Puppy domain module.
//!
//! Puppies are created in one batch when a litter's birth is recorded.

mod birth;
mod puppy;

pub use birth::{
    create_puppies, default_identifier, validate_birth_batch, BirthTally, PuppyBirthRecord,
};
pub use puppy::{Puppy, PuppyStatus};
