//! Puppy entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{LitterId, PuppyId, Sex, TenantId, Timestamp};

/// Sale and care status of a puppy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PuppyStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    Retained,
    Deceased,
    Returned,
}

impl PuppyStatus {
    /// Returns true unless the puppy died.
    pub fn is_alive(&self) -> bool {
        !matches!(self, PuppyStatus::Deceased)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PuppyStatus::Available => "available",
            PuppyStatus::Reserved => "reserved",
            PuppyStatus::Sold => "sold",
            PuppyStatus::Retained => "retained",
            PuppyStatus::Deceased => "deceased",
            PuppyStatus::Returned => "returned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(PuppyStatus::Available),
            "reserved" => Some(PuppyStatus::Reserved),
            "sold" => Some(PuppyStatus::Sold),
            "retained" => Some(PuppyStatus::Retained),
            "deceased" => Some(PuppyStatus::Deceased),
            "returned" => Some(PuppyStatus::Returned),
            _ => None,
        }
    }
}

impl fmt::Display for PuppyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A puppy born into a litter.
///
/// Puppies are created exactly once, as a batch, when a birth is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puppy {
    pub id: PuppyId,
    pub tenant_id: TenantId,
    pub litter_id: LitterId,
    /// Unique within the litter; defaults to `{M|F}-{birth_order}`.
    pub identifier: String,
    pub name: Option<String>,
    pub sex: Sex,
    pub color: Option<String>,
    pub status: PuppyStatus,
    /// 1-based position in the whelping order.
    pub birth_order: u32,
    /// Birth weight in grams.
    pub birth_weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl Puppy {
    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }
}
