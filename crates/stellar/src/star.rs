use seed_chain::Seed;
use serde::{Deserialize, Serialize};

use crate::star_class::{StarClass, StarColor};

/// One star of a solar system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub seed: Seed,
    pub class: StarClass,
    pub color: StarColor,
    /// Radius relative to a yellow dwarf
    pub radius_factor: f64,
}

impl Star {
    /// Derive a star from its own seed
    pub fn from_seed(seed: Seed) -> Self {
        let class = StarClass::sample(&mut seed.rng());

        Self {
            seed,
            class,
            color: class.color(),
            radius_factor: class.radius_factor(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }
}
