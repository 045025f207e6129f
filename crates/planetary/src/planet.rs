use serde::{Deserialize, Serialize};
use seed_chain::Seed;

use crate::atmosphere::Atmosphere;
use crate::kind::PlanetKind;
use crate::life::LifeForm;
use crate::orbit::Orbit;
use crate::physique::Physique;
use crate::rotation::Rotation;

/// Read-only snapshot of a derived planet
///
/// Every field is a pure function of the planet's seed, its name and the
/// physical constants it was generated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub seed: Seed,
    pub name: String,
    pub kind: PlanetKind,
    pub atmosphere: Atmosphere,
    pub physique: Physique,
    pub orbit: Orbit,
    pub rotation: Rotation,
    /// 5 to 10 distinct element names
    pub elements: Vec<String>,
    pub life: LifeForm,
    pub has_rings: bool,
    /// Starting rotation angle in radians, in [0, 2π)
    pub initial_rotation_angle: f64,
    /// Starting position along the orbit in radians, in [0, 2π)
    pub initial_orbital_angle: f64,
}

impl Planet {
    pub fn has_element(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    pub fn surface_temperature_celsius(&self) -> f64 {
        self.physique.surface_temperature.to_celsius()
    }

    /// True when the life form is anything but none
    pub fn has_life(&self) -> bool {
        self.life.is_alive()
    }
}
