use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{circular_orbital_velocity, Length, PhysicalConstants, Time, Velocity};

/// Orbital radius range in AU
pub const MIN_ORBITAL_RADIUS_AU: f64 = 0.1;
pub const MAX_ORBITAL_RADIUS_AU: f64 = 40.0;

pub const MAX_ECCENTRICITY: f64 = 0.5;

/// Orbit around the system's reference star of one solar mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    pub radius: Length,
    pub period: Time,
    pub speed: Velocity,
    pub eccentricity: f64,
}

impl Orbit {
    /// Draw the orbital radius and eccentricity, then derive period and speed
    pub fn sample(constants: &PhysicalConstants, rng: &mut ChaChaRng) -> Self {
        let radius_au = rng.random_range(MIN_ORBITAL_RADIUS_AU..=MAX_ORBITAL_RADIUS_AU);
        let eccentricity = rng.random_range(0.0..=MAX_ECCENTRICITY);
        Self::circular(Length::from_au(radius_au), eccentricity, constants)
    }

    /// Circular-orbit quantities at the given radius
    ///
    /// Period from Kepler's third law, 2π√(r³/GM☉); speed √(GM☉/r).
    pub fn circular(radius: Length, eccentricity: f64, constants: &PhysicalConstants) -> Self {
        let mu = constants.solar_gravitational_parameter();
        let period = Time::from_seconds(2.0 * PI * (radius.powi(3) / mu).sqrt());
        let speed =
            circular_orbital_velocity(constants.gravitational_constant, constants.sun_mass, radius);

        Self {
            radius,
            period,
            speed,
            eccentricity,
        }
    }

    pub fn radius_au(&self) -> f64 {
        self.radius.to_au()
    }
}
