//! LitterStatus enum for tracking the breeding lifecycle of a litter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a litter.
///
/// ```text
/// planned -> confirmed -> pregnant -> born -> {weaned, closed}
///     \__________\___________\_________\____-> cancelled
/// ```
///
/// A mating creates litters directly at `Confirmed`; `Planned` is reserved
/// for litters created by other tooling. A birth may be recorded without a
/// prior pregnancy confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LitterStatus {
    #[default]
    Planned,
    Confirmed,
    Pregnant,
    Born,
    Weaned,
    Closed,
    Cancelled,
}

impl LitterStatus {
    /// All statuses in lifecycle order.
    pub fn all() -> &'static [LitterStatus] {
        &[
            LitterStatus::Planned,
            LitterStatus::Confirmed,
            LitterStatus::Pregnant,
            LitterStatus::Born,
            LitterStatus::Weaned,
            LitterStatus::Closed,
            LitterStatus::Cancelled,
        ]
    }

    /// Returns true while the dam is expected to whelp.
    pub fn awaits_birth(&self) -> bool {
        matches!(self, LitterStatus::Confirmed | LitterStatus::Pregnant)
    }

    /// Returns true once puppies have been recorded.
    pub fn has_birth_recorded(&self) -> bool {
        matches!(
            self,
            LitterStatus::Born | LitterStatus::Weaned | LitterStatus::Closed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LitterStatus::Planned => "planned",
            LitterStatus::Confirmed => "confirmed",
            LitterStatus::Pregnant => "pregnant",
            LitterStatus::Born => "born",
            LitterStatus::Weaned => "weaned",
            LitterStatus::Closed => "closed",
            LitterStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        LitterStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
    }
}

impl StateMachine for LitterStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use LitterStatus::*;
        match self {
            Planned => vec![Confirmed, Pregnant, Born, Cancelled],
            Confirmed => vec![Pregnant, Born, Cancelled],
            Pregnant => vec![Born, Cancelled],
            Born => vec![Weaned, Closed, Cancelled],
            Weaned | Closed | Cancelled => vec![],
        }
    }
}

impl fmt::Display for LitterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
