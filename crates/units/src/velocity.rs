use serde::{Deserialize, Serialize};

use crate::length::Length;
use crate::mass::Mass;

/// Speed in m/s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_m_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1e3)
    }

    pub fn to_m_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1e3
    }
}

/// Circular orbital speed √(G·M/r)
///
/// # Arguments
/// * `gravitational_constant` - G in m³ kg⁻¹ s⁻²
/// * `central_mass` - Mass of the body being orbited
/// * `radius` - Orbital radius
pub fn circular_orbital_velocity(
    gravitational_constant: f64,
    central_mass: Mass,
    radius: Length,
) -> Velocity {
    Velocity((gravitational_constant * central_mass.to_kg() / radius.to_m()).sqrt())
}
