//! Litter domain module.
//!
//! Holds the litter aggregate, its lifecycle status machine and the
//! gestation arithmetic that derives due dates from mating dates.

mod aggregate;
mod breeding;
mod errors;
mod gestation;
mod status;

pub use aggregate::{Litter, LitterRecord, Mating};
pub use breeding::{BirthType, MatingType, PregnancyTestMethod};
pub use errors::{BreedingError, RecordKind};
pub use gestation::{expected_birth_date, falls_within, GESTATION_DAYS};
pub use status::LitterStatus;
