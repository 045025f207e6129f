//! Planetary ring decision

use rand::Rng;
use rand_chacha::ChaChaRng;
use units::{Density, Length, PhysicalConstants, Time};

use crate::orbit::Orbit;
use crate::physique::Physique;
use crate::rotation::Rotation;

/// Upper bound of the ring probability, in percent
pub const MAX_RING_PROBABILITY: f64 = 7.0;

/// Density the Roche limit is normalized against (kg/m³)
const REFERENCE_DENSITY: f64 = 3000.0;

/// Roche limit: 2.44 · r · (ρ / 3000)^(1/3)
pub fn roche_limit(diameter: Length, density: Density) -> Length {
    diameter.half() * (2.44 * (density.to_kg_per_m3() / REFERENCE_DENSITY).cbrt())
}

/// Orbital distance on the ring scale: the radius in megameters, compared
/// directly against the Roche limit in meters
pub fn ring_distance(orbit: &Orbit) -> f64 {
    orbit.radius.to_megameters()
}

/// Whether the planet lies inside its own Roche limit, the only place rings can form
pub fn within_roche_limit(physique: &Physique, orbit: &Orbit) -> bool {
    ring_distance(orbit) <= roche_limit(physique.diameter, physique.density).to_m()
}

/// Ring probability in percent, at most [`MAX_RING_PROBABILITY`]
///
/// Grows with mass and gravity (relative to Earth) and with fast rotation;
/// falls with axial tilt. A sigmoid centred at 150° on the surface
/// temperature scale favours warm bodies.
pub fn ring_probability(
    physique: &Physique,
    rotation: &Rotation,
    constants: &PhysicalConstants,
) -> f64 {
    let gravity_factor = physique.gravity / constants.earth_gravity;
    let mass_factor = physique.mass / constants.earth_mass;
    let rotation_factor = (Time::from_days(1.0) / rotation.period).min(1.5);
    let celsius = physique.surface_temperature.to_celsius();
    let temperature_factor = 1.0 / (1.0 + (-0.001 * (celsius - 150.0)).exp());
    let tilt_factor = 1.0 - rotation.axial_tilt / 90.0;

    let probability =
        mass_factor * gravity_factor * rotation_factor * tilt_factor * temperature_factor * 20.0;

    if probability.is_finite() {
        probability.clamp(0.0, MAX_RING_PROBABILITY)
    } else {
        0.0
    }
}

/// Decide ring presence with a single Bernoulli draw from the ring stream
pub fn has_rings(
    physique: &Physique,
    orbit: &Orbit,
    rotation: &Rotation,
    constants: &PhysicalConstants,
    rng: &mut ChaChaRng,
) -> bool {
    if !within_roche_limit(physique, orbit) {
        return false;
    }
    let draw = rng.random_range(0.0..100.0);
    draw <= ring_probability(physique, rotation, constants)
}
