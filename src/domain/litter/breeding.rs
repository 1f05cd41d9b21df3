//! Value types describing how a litter was conceived and born.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the dam was bred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatingType {
    #[default]
    Natural,
    ArtificialFresh,
    ArtificialChilled,
    ArtificialFrozen,
}

/// How the pregnancy was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PregnancyTestMethod {
    #[default]
    Ultrasound,
    Palpation,
    Relaxin,
    XRay,
}

/// How the puppies were delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BirthType {
    #[default]
    Natural,
    Assisted,
    Cesarean,
}

/// Storage names for the breeding enums.
macro_rules! storage_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

storage_names!(MatingType {
    Natural => "natural",
    ArtificialFresh => "artificial_fresh",
    ArtificialChilled => "artificial_chilled",
    ArtificialFrozen => "artificial_frozen",
});

storage_names!(PregnancyTestMethod {
    Ultrasound => "ultrasound",
    Palpation => "palpation",
    Relaxin => "relaxin",
    XRay => "x_ray",
});

storage_names!(BirthType {
    Natural => "natural",
    Assisted => "assisted",
    Cesarean => "cesarean",
});
