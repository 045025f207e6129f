//! Rotation period with tidal braking, orbital corrections and tidal-lock
//! handling
//!
//! The period starts from a kind-specific base time scaled by the body's
//! inertia, is shortened by tidal interaction with the star, lengthened by
//! eccentricity and distance corrections, and finally clamped to
//! [`MIN_ROTATION_HOURS`, `MAX_ROTATION_DAYS`].

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{PhysicalConstants, Time};

use crate::kind::PlanetKind;
use crate::orbit::Orbit;
use crate::physique::Physique;

pub const MIN_ROTATION_HOURS: f64 = 6.0;
pub const MAX_ROTATION_DAYS: f64 = 365.0;

pub const MAX_AXIAL_TILT_DEG: f64 = 45.0;

/// Tidal damping applied once to orbits beyond this radius
const TIDAL_DAMPING_RADIUS_AU: f64 = 1.0;
const TIDAL_DAMPING: f64 = 0.1;

/// Rotation state and the intermediate factors that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub period: Time,
    /// Kind-specific base rotation time before inertia scaling
    pub base: Time,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    /// kg·m²
    pub moment_of_inertia: f64,
    /// Love number k2
    pub love_number: f64,
    /// Tidal dissipation number Q
    pub dissipation: f64,
    pub tidal_effect: f64,
    pub eccentricity_factor: f64,
    /// Whether the close-orbit tidal-lock correction replaced the period
    pub lock_corrected: bool,
}

impl Rotation {
    /// Derive the rotation of a body on the given orbit
    pub fn derive(
        kind: PlanetKind,
        physique: &Physique,
        orbit: &Orbit,
        constants: &PhysicalConstants,
        rng: &mut ChaChaRng,
    ) -> Self {
        let base = Time::from_hours(rng.random_range(kind.base_rotation_hours()));
        let love_number = rng.random_range(kind.love_number_range());
        let dissipation = rng.random_range(kind.dissipation_range());
        let axial_tilt = rng.random_range(0.0..=MAX_AXIAL_TILT_DEG);

        let mass = physique.mass.to_kg();
        let moment_of_inertia = kind.shape_factor() * mass * physique.radius().powi(2);
        let tidal_effect = tidal_effect(constants, love_number, dissipation, physique, orbit);

        let inertia_ratio =
            moment_of_inertia / (mass * physique.gravity * physique.diameter.to_m());
        let braked = base * inertia_ratio.sqrt() / tidal_effect.max(1.0);

        let eccentricity_factor = rng.random_range(0.8..=1.2);
        let distance_influence = orbit.radius_au().powf(-1.5) * rng.random_range(0.9..=1.1);
        let mut period = braked * (eccentricity_factor * distance_influence).max(1.0);

        let lock_corrected = needs_lock_correction(period, orbit);
        if lock_corrected {
            period = redraw_locked_period(period, orbit, rng);
        }

        Self {
            period: clamp_period(period),
            base,
            axial_tilt,
            moment_of_inertia,
            love_number,
            dissipation,
            tidal_effect,
            eccentricity_factor,
            lock_corrected,
        }
    }

    /// Length of a day relative to Earth's
    pub fn day_ratio(&self) -> f64 {
        self.period.to_days()
    }
}

/// Tidal braking strength: (3·G·k2·M☉²·r⁵) / (2·Q·a⁶·m) × orbital period
///
/// Damped by a factor of ten, once, for orbits beyond 1 AU.
pub fn tidal_effect(
    constants: &PhysicalConstants,
    love_number: f64,
    dissipation: f64,
    physique: &Physique,
    orbit: &Orbit,
) -> f64 {
    let g = constants.gravitational_constant;
    let sun = constants.sun_mass.to_kg();
    let numerator = 3.0 * g * love_number * sun * sun * physique.radius().powi(5);
    let denominator = 2.0 * dissipation * orbit.radius.powi(6) * physique.mass.to_kg();
    let effect = numerator / denominator * orbit.period.to_seconds();

    if orbit.radius_au() > TIDAL_DAMPING_RADIUS_AU {
        effect * TIDAL_DAMPING
    } else {
        effect
    }
}

/// Close orbits cannot keep a rotation longer than a year and twice the orbit
pub fn needs_lock_correction(period: Time, orbit: &Orbit) -> bool {
    period.is_finite()
        && orbit.radius_au() < 1.0
        && period > Time::from_years(1.0)
        && period > orbit.period * 2.0
}

/// Redraw a tidally locked period uniformly in `[6 h, period / (2 + (1 - a)·10)]`
pub fn redraw_locked_period(period: Time, orbit: &Orbit, rng: &mut ChaChaRng) -> Time {
    let divisor = 2.0 + (1.0 - orbit.radius_au()) * 10.0;
    let low = Time::from_hours(MIN_ROTATION_HOURS).to_seconds();
    let high = (period / divisor).to_seconds().max(low);
    Time::from_seconds(rng.random_range(low..=high))
}

/// Clamp to the documented band; a non-finite period collapses to the upper bound
pub fn clamp_period(period: Time) -> Time {
    let min = Time::from_hours(MIN_ROTATION_HOURS);
    let max = Time::from_days(MAX_ROTATION_DAYS);

    if period.is_finite() {
        period.clamp(min, max)
    } else {
        max
    }
}
