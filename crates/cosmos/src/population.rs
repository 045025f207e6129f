//! Galaxy classes and the time-dependent population model
//!
//! A galaxy's system count starts at a class minimum scaled by proximity to
//! the universe center and grows by `proximity * 10` systems per elapsed
//! minute until it saturates at the class maximum.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Cosmic age in seconds past which every galaxy collapses to a void
pub const VOID_AGE_SECONDS: f64 = 59_999_997_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GalaxyClass {
    Dwarf,
    Spiral,
    Elliptical,
    SingularityVoid,
}

impl GalaxyClass {
    /// Classes a galaxy can be born with
    pub const LIVING: [GalaxyClass; 3] = [
        GalaxyClass::Dwarf,
        GalaxyClass::Spiral,
        GalaxyClass::Elliptical,
    ];

    pub fn sample(rng: &mut ChaChaRng) -> Self {
        Self::LIVING[rng.random_range(0..Self::LIVING.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GalaxyClass::Dwarf => "Dwarf",
            GalaxyClass::Spiral => "Spiral",
            GalaxyClass::Elliptical => "Elliptical",
            GalaxyClass::SingularityVoid => "Singularity Void",
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, GalaxyClass::SingularityVoid)
    }

    pub fn min_systems(&self) -> u64 {
        match self {
            GalaxyClass::Dwarf => 500,
            GalaxyClass::Spiral => 1_500,
            GalaxyClass::Elliptical => 5_000,
            GalaxyClass::SingularityVoid => 0,
        }
    }

    /// Interval the class maximum is drawn from
    pub fn max_systems_range(&self) -> RangeInclusive<u64> {
        match self {
            GalaxyClass::Dwarf => 100_000..=10_000_000,
            GalaxyClass::Spiral => 1_000_000_000..=50_000_000_000,
            GalaxyClass::Elliptical => 10_000_000_000..=100_000_000_000,
            GalaxyClass::SingularityVoid => 0..=0,
        }
    }

    pub fn sample_range(&self, rng: &mut ChaChaRng) -> SystemRange {
        SystemRange {
            min: self.min_systems(),
            max: rng.random_range(self.max_systems_range()),
        }
    }
}

impl fmt::Display for GalaxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationModel {
    pub range: SystemRange,
    pub proximity: f64,
}

impl PopulationModel {
    pub fn new(range: SystemRange, proximity: f64) -> Self {
        Self {
            range,
            proximity: proximity.clamp(0.0, 1.0),
        }
    }

    /// Population at the cosmic origin
    pub fn base(&self) -> u64 {
        let span = self.range.max.saturating_sub(self.range.min) as f64;
        self.range.min + (span * self.proximity).floor() as u64
    }

    /// Population after `elapsed_seconds` of cosmic time
    ///
    /// Negative elapsed time counts as no growth.
    pub fn systems_at(&self, elapsed_seconds: f64) -> u64 {
        let minutes = (elapsed_seconds.max(0.0) / 60.0).floor();
        let growth = (minutes * self.proximity * 10.0).floor();
        let growth = if growth.is_finite() { growth as u64 } else { u64::MAX };
        self.base().saturating_add(growth).min(self.range.max)
    }
}

pub fn is_void_age(elapsed_seconds: f64) -> bool {
    elapsed_seconds >= VOID_AGE_SECONDS
}
