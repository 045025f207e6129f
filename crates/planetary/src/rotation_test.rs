use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Density, Length, PhysicalConstants, Temperature, Time};

use crate::kind::PlanetKind;
use crate::orbit::Orbit;
use crate::physique::Physique;
use crate::rotation::{
    clamp_period, needs_lock_correction, redraw_locked_period, tidal_effect, Rotation,
    MAX_AXIAL_TILT_DEG, MAX_ROTATION_DAYS, MIN_ROTATION_HOURS,
};

fn earth(constants: &PhysicalConstants) -> Physique {
    Physique::from_parts(
        Length::from_km(12_742.0),
        Density::from_kg_per_m3(5514.0),
        Temperature::from_celsius(15.0),
        constants,
    )
}

#[test]
fn test_clamp_band() {
    let min = Time::from_hours(MIN_ROTATION_HOURS);
    let max = Time::from_days(MAX_ROTATION_DAYS);

    assert_eq!(clamp_period(Time::from_minutes(5.0)), min);
    assert_eq!(clamp_period(Time::from_years(3.0)), max);
    assert_eq!(clamp_period(Time::from_hours(24.0)), Time::from_hours(24.0));
}

#[test]
fn test_non_finite_period_collapses_to_upper_bound() {
    let max = Time::from_days(MAX_ROTATION_DAYS);
    assert_eq!(clamp_period(Time::from_seconds(f64::NAN)), max);
    assert_eq!(clamp_period(Time::from_seconds(f64::INFINITY)), max);
}

#[test]
fn test_tidal_damping_applies_beyond_one_au() {
    let constants = PhysicalConstants::standard();
    let body = earth(&constants);
    let orbit = Orbit::circular(Length::from_au(2.0), 0.0, &constants);

    let g = constants.gravitational_constant;
    let sun = constants.sun_mass.to_kg();
    let undamped = 3.0 * g * 0.3 * sun * sun * body.radius().powi(5)
        / (2.0 * 100.0 * orbit.radius.powi(6) * body.mass.to_kg())
        * orbit.period.to_seconds();

    let effect = tidal_effect(&constants, 0.3, 100.0, &body, &orbit);
    assert_relative_eq!(effect, undamped * 0.1, max_relative = 1e-9);
}

#[test]
fn test_tidal_effect_falls_with_distance() {
    let constants = PhysicalConstants::standard();
    let body = earth(&constants);
    let close = Orbit::circular(Length::from_au(0.2), 0.0, &constants);
    let far = Orbit::circular(Length::from_au(0.8), 0.0, &constants);

    assert!(
        tidal_effect(&constants, 0.3, 100.0, &body, &close)
            > tidal_effect(&constants, 0.3, 100.0, &body, &far)
    );
}

#[test]
fn test_lock_correction_condition() {
    let constants = PhysicalConstants::standard();
    let close = Orbit::circular(Length::from_au(0.5), 0.0, &constants);
    let far = Orbit::circular(Length::from_au(5.0), 0.0, &constants);

    assert!(needs_lock_correction(Time::from_years(2.0), &close));
    assert!(!needs_lock_correction(Time::from_days(100.0), &close));
    assert!(!needs_lock_correction(Time::from_years(2.0), &far));
    assert!(!needs_lock_correction(Time::from_seconds(f64::INFINITY), &close));
}

#[test]
fn test_locked_period_redraw_band() {
    let constants = PhysicalConstants::standard();
    let mut rng = ChaChaRng::seed_from_u64(3);
    let min = Time::from_hours(MIN_ROTATION_HOURS);

    for radius in [0.1, 0.5, 0.95] {
        let orbit = Orbit::circular(Length::from_au(radius), 0.0, &constants);
        let uncorrected = Time::from_years(3.0);
        let ceiling = uncorrected / (2.0 + (1.0 - radius) * 10.0);
        assert!(needs_lock_correction(uncorrected, &orbit));

        for _ in 0..200 {
            let period = redraw_locked_period(uncorrected, &orbit, &mut rng);
            assert!(period >= min, "{radius} AU: {period:?}");
            assert!(period <= ceiling, "{radius} AU: {period:?} > {ceiling:?}");
            assert!(period < uncorrected);
        }
    }
}

#[test]
fn test_locked_period_redraw_never_below_floor() {
    let constants = PhysicalConstants::standard();
    let mut rng = ChaChaRng::seed_from_u64(4);
    let orbit = Orbit::circular(Length::from_au(0.1), 0.0, &constants);

    let period = redraw_locked_period(Time::from_hours(10.0), &orbit, &mut rng);
    assert_relative_eq!(period.to_hours(), MIN_ROTATION_HOURS, max_relative = 1e-12);
}

#[test]
fn test_derived_rotation_is_clamped_for_every_kind() {
    let constants = PhysicalConstants::standard();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let min = Time::from_hours(MIN_ROTATION_HOURS);
    let max = Time::from_days(MAX_ROTATION_DAYS);

    for kind in PlanetKind::ALL {
        for _ in 0..50 {
            let physique = Physique::sample(kind, &constants, &mut rng);
            let orbit = Orbit::sample(&constants, &mut rng);
            let rotation = Rotation::derive(kind, &physique, &orbit, &constants, &mut rng);

            assert!(rotation.period.is_finite());
            assert!(
                rotation.period >= min && rotation.period <= max,
                "{kind}: {:?}",
                rotation.period
            );
            assert!((0.0..=MAX_AXIAL_TILT_DEG).contains(&rotation.axial_tilt));
            assert!((0.8..=1.2).contains(&rotation.eccentricity_factor));
            assert!(kind.love_number_range().contains(&rotation.love_number));
            assert!(kind.dissipation_range().contains(&rotation.dissipation));
        }
    }
}

#[test]
fn test_moment_of_inertia_uses_shape_factor() {
    let constants = PhysicalConstants::standard();
    let mut rng = ChaChaRng::seed_from_u64(8);
    let body = earth(&constants);
    let orbit = Orbit::circular(Length::from_au(1.5), 0.1, &constants);

    let rotation = Rotation::derive(PlanetKind::Diamond, &body, &orbit, &constants, &mut rng);
    assert_relative_eq!(
        rotation.moment_of_inertia,
        0.35 * body.mass.to_kg() * body.radius().powi(2),
        max_relative = 1e-12
    );
}
