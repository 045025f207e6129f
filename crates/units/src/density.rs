use serde::{Deserialize, Serialize};

use crate::length::Length;
use crate::mass::Mass;

/// Volume density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Mass of a sphere of this density with the given diameter
    pub fn sphere_mass(&self, diameter: Length) -> Mass {
        Mass::from_kg(self.0 * sphere_volume(diameter))
    }
}

/// Volume in m³ of a sphere with the given diameter
pub fn sphere_volume(diameter: Length) -> f64 {
    (4.0 / 3.0) * std::f64::consts::PI * diameter.half().powi(3)
}
