//! Birth batch: turning whelping input into puppies and litter tallies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Puppy, PuppyStatus};
use crate::domain::foundation::{FieldErrors, LitterId, PuppyId, Sex, TenantId, Timestamp};

/// Input for one puppy of a whelping, in birth order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuppyBirthRecord {
    pub sex: Sex,
    /// Overrides the default `{M|F}-{birth_order}` identifier.
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    /// Defaults to `Available`.
    pub status: Option<PuppyStatus>,
    /// Birth weight in grams.
    pub birth_weight: Option<f64>,
    pub notes: Option<String>,
}

impl PuppyBirthRecord {
    pub fn new(sex: Sex) -> Self {
        Self {
            sex,
            identifier: None,
            name: None,
            color: None,
            status: None,
            birth_weight: None,
            notes: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_status(mut self, status: PuppyStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_birth_weight(mut self, grams: f64) -> Self {
        self.birth_weight = Some(grams);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn resolved_status(&self) -> PuppyStatus {
        self.status.unwrap_or_default()
    }

    fn resolved_identifier(&self, birth_order: u32) -> String {
        match self.identifier.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => custom.to_string(),
            _ => default_identifier(self.sex, birth_order),
        }
    }
}

/// Default puppy identifier, e.g. `M-1` for a male born first.
pub fn default_identifier(sex: Sex, birth_order: u32) -> String {
    format!("{}-{}", sex.code(), birth_order)
}

/// Counts written onto a litter when its birth is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthTally {
    pub total: u32,
    pub alive: u32,
    pub males: u32,
    pub females: u32,
}

impl BirthTally {
    /// Tallies a batch of birth records.
    pub fn from_records(records: &[PuppyBirthRecord]) -> Self {
        records.iter().fold(Self::default(), |mut tally, record| {
            tally.total += 1;
            if record.resolved_status().is_alive() {
                tally.alive += 1;
            }
            match record.sex {
                Sex::Male => tally.males += 1,
                Sex::Female => tally.females += 1,
            }
            tally
        })
    }

    /// Tallies puppies already persisted for a litter.
    pub fn from_puppies(puppies: &[Puppy]) -> Self {
        puppies.iter().fold(Self::default(), |mut tally, puppy| {
            tally.total += 1;
            if puppy.is_alive() {
                tally.alive += 1;
            }
            match puppy.sex {
                Sex::Male => tally.males += 1,
                Sex::Female => tally.females += 1,
            }
            tally
        })
    }
}

/// Checks a whelping batch before anything is written.
///
/// All violations are collected so the caller sees them together.
pub fn validate_birth_batch(
    records: &[PuppyBirthRecord],
    birth_date: NaiveDate,
    mating_date: Option<NaiveDate>,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if records.is_empty() {
        errors.add("puppies", "At least one puppy is required");
    }

    if let Some(mating_date) = mating_date {
        if birth_date < mating_date {
            errors.add(
                "birth_date",
                format!("Birth date {} precedes mating date {}", birth_date, mating_date),
            );
        }
    }

    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let identifier = record.resolved_identifier(index as u32 + 1);
        if !seen.insert(identifier.clone()) {
            errors.add(
                format!("puppies[{}].identifier", index),
                format!("Identifier '{}' is used more than once in this litter", identifier),
            );
        }

        if let Some(weight) = record.birth_weight {
            if !weight.is_finite() || weight <= 0.0 {
                errors.add(
                    format!("puppies[{}].birth_weight", index),
                    "Birth weight must be a positive number of grams",
                );
            }
        }
    }

    errors.into_result()
}

/// Creates the puppies of a batch in input order.
///
/// Birth order is the 1-based input position.
pub fn create_puppies(
    tenant_id: &TenantId,
    litter_id: LitterId,
    records: &[PuppyBirthRecord],
) -> Vec<Puppy> {
    let created_at = Timestamp::now();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let birth_order = index as u32 + 1;
            Puppy {
                id: PuppyId::new(),
                tenant_id: tenant_id.clone(),
                litter_id,
                identifier: record.resolved_identifier(birth_order),
                name: record.name.clone(),
                sex: record.sex,
                color: record.color.clone(),
                status: record.resolved_status(),
                birth_order,
                birth_weight: record.birth_weight,
                notes: record.notes.clone(),
                created_at,
            }
        })
        .collect()
}
