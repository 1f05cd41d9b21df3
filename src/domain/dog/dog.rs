//! Dog read model.
//!
//! Dogs are registered outside the breeding core. The core only reads them
//! to validate sire/dam roles and to walk the sire/dam graph.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::{DogId, Sex, TenantId};

/// Lifecycle status of a dog in the kennel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DogStatus {
    #[default]
    Active,
    Retired,
    Sold,
    Deceased,
}

impl DogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DogStatus::Active => "active",
            DogStatus::Retired => "retired",
            DogStatus::Sold => "sold",
            DogStatus::Deceased => "deceased",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(DogStatus::Active),
            "retired" => Some(DogStatus::Retired),
            "sold" => Some(DogStatus::Sold),
            "deceased" => Some(DogStatus::Deceased),
            _ => None,
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dog record.
///
/// `sire_id` / `dam_id` may be unset (no recorded ancestor) or point at a
/// record that no longer resolves (recorded but missing). Historical data may
/// contain a dog listed as sire that is not male; sex is only enforced when a
/// dog is used in a new mating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub tenant_id: TenantId,
    pub name: String,
    pub registered_name: Option<String>,
    pub registration_number: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub sire_id: Option<DogId>,
    pub dam_id: Option<DogId>,
    pub status: DogStatus,
}

impl Dog {
    /// Creates an active dog with no recorded parents.
    pub fn new(tenant_id: TenantId, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: DogId::new(),
            tenant_id,
            name: name.into(),
            registered_name: None,
            registration_number: None,
            breed: None,
            color: None,
            sex,
            birth_date: None,
            sire_id: None,
            dam_id: None,
            status: DogStatus::Active,
        }
    }

    pub fn with_parents(mut self, sire_id: Option<DogId>, dam_id: Option<DogId>) -> Self {
        self.sire_id = sire_id;
        self.dam_id = dam_id;
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_registration(
        mut self,
        registered_name: impl Into<String>,
        registration_number: impl Into<String>,
    ) -> Self {
        self.registered_name = Some(registered_name.into());
        self.registration_number = Some(registration_number.into());
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns true when both parents are recorded and match the other dog's.
    pub fn shares_both_parents_with(&self, other: &Dog) -> bool {
        self.sire_id.is_some()
            && self.dam_id.is_some()
            && self.sire_id == other.sire_id
            && self.dam_id == other.dam_id
    }
}

/// Reverse lookup over the sire/dam graph: dogs whose sire (or dam) is the given dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentFilter {
    Sire(DogId),
    Dam(DogId),
}

impl ParentFilter {
    /// Filter selecting the offspring of `dog`, by the role its sex implies.
    pub fn offspring_of(dog: &Dog) -> Self {
        match dog.sex {
            Sex::Male => ParentFilter::Sire(dog.id),
            Sex::Female => ParentFilter::Dam(dog.id),
        }
    }

    /// Returns true if `dog` is a child under this filter.
    pub fn matches(&self, dog: &Dog) -> bool {
        match self {
            ParentFilter::Sire(id) => dog.sire_id == Some(*id),
            ParentFilter::Dam(id) => dog.dam_id == Some(*id),
        }
    }
}

/// Orders dogs youngest first; dogs without a birth date sort last.
pub fn by_birth_date_desc(a: &Dog, b: &Dog) -> Ordering {
    match (a.birth_date, b.birth_date) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}
