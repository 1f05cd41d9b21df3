//! Domain defaults: label language and pedigree depth.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Locale;
use crate::domain::pedigree::Generations;

#[derive(Debug, Clone, Deserialize)]
pub struct DomainConfig {
    /// Language of litter names, pedigree roles and the unknown-ancestor name.
    #[serde(default)]
    pub locale: Locale,

    /// Pedigree depth used when a query does not ask for one.
    #[serde(default = "default_pedigree_generations")]
    pub pedigree_generations: u32,
}

impl DomainConfig {
    pub fn generations(&self) -> Generations {
        Generations::clamped(self.pedigree_generations)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = (Generations::MIN, Generations::MAX);
        if self.pedigree_generations < u32::from(min) || self.pedigree_generations > u32::from(max) {
            return Err(ValidationError::GenerationsOutOfRange {
                min,
                max,
                actual: self.pedigree_generations,
            });
        }
        Ok(())
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            pedigree_generations: default_pedigree_generations(),
        }
    }
}

fn default_pedigree_generations() -> u32 {
    u32::from(Generations::DEFAULT)
}
