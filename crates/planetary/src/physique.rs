use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{sphere_volume, Density, Length, Mass, PhysicalConstants, Temperature};

use crate::kind::PlanetKind;

/// Bulk physical quantities of a planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Physique {
    pub diameter: Length,
    /// Volume in m³
    pub volume: f64,
    pub density: Density,
    pub mass: Mass,
    /// Surface gravity in m/s²
    pub gravity: f64,
    pub surface_temperature: Temperature,
}

impl Physique {
    /// Draw diameter, density and temperature from the kind's ranges
    pub fn sample(kind: PlanetKind, constants: &PhysicalConstants, rng: &mut ChaChaRng) -> Self {
        let diameter = constants.earth_diameter * rng.random_range(kind.diameter_range());
        let density = Density::from_kg_per_m3(rng.random_range(kind.density_range()));
        let surface_temperature =
            Temperature::from_celsius(rng.random_range(kind.temperature_range_celsius()));

        Self::from_parts(diameter, density, surface_temperature, constants)
    }

    /// Derive volume, mass and gravity from diameter and density
    pub fn from_parts(
        diameter: Length,
        density: Density,
        surface_temperature: Temperature,
        constants: &PhysicalConstants,
    ) -> Self {
        let mass = density.sphere_mass(diameter);
        let gravity = constants.gravitational_constant * mass.to_kg() / diameter.half().powi(2);

        Self {
            diameter,
            volume: sphere_volume(diameter),
            density,
            mass,
            gravity,
            surface_temperature,
        }
    }

    pub fn radius(&self) -> Length {
        self.diameter.half()
    }
}
