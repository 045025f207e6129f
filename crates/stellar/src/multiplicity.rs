use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// How many stars a solar system has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Multiplicity {
    Single,
    Binary,
    Tertiary,
}

impl Multiplicity {
    /// Weighted draw: 70% single, 25% binary, 5% tertiary
    pub fn sample(rng: &mut ChaChaRng) -> Self {
        match rng.random::<f64>() {
            x if x < 0.70 => Multiplicity::Single,
            x if x < 0.95 => Multiplicity::Binary,
            _ => Multiplicity::Tertiary,
        }
    }

    pub fn star_count(&self) -> usize {
        match self {
            Multiplicity::Single => 1,
            Multiplicity::Binary => 2,
            Multiplicity::Tertiary => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Multiplicity::Single => "single",
            Multiplicity::Binary => "binary",
            Multiplicity::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
