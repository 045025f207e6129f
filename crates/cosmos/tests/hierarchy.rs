use std::collections::HashSet;
use std::sync::Arc;

use cosmos::{AtlasConfig, GalaxyClass, ManualClock, Universe, MAX_COORDINATE};
use planetary::rings::within_roche_limit;
use planetary::rotation::{MAX_ROTATION_DAYS, MIN_ROTATION_HOURS};
use proptest::prelude::*;
use units::Time;

const ORIGIN: i64 = 1_700_000_000;

fn universe(seed: &str) -> (Universe, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(ORIGIN as f64));
    let universe = Universe::with_clock(&AtlasConfig::new(seed, ORIGIN), clock.clone());
    (universe, clock)
}

#[test]
fn test_seed_42_scenario() {
    let (universe, _) = universe("42");

    let first = universe.get_galaxy(0, 0, 0).unwrap();
    let second = universe.get_galaxy(0, 0, 0).unwrap();
    assert_eq!(first.name(), second.name());
    assert_eq!(first.class(), second.class());

    let err = universe
        .get_galaxy(MAX_COORDINATE as i64 + 1, 0, 0)
        .unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn test_independent_universes_agree() {
    let (a, _) = universe("42");
    let (b, _) = universe("42");

    for (x, y, z) in [(0, 0, 0), (17, 4_000_000, 9), (10_000_000, 1, 2)] {
        let ga = a.get_galaxy(x, y, z).unwrap();
        let gb = b.get_galaxy(x, y, z).unwrap();
        assert_eq!(ga.snapshot(), gb.snapshot());

        for index in [0, 1, 250] {
            let sa = ga.get_solar_system(index).unwrap();
            let sb = gb.get_solar_system(index).unwrap();
            assert_eq!(sa.snapshot(), sb.snapshot());
            assert_eq!(sa.planets(), sb.planets());
        }
    }
}

#[test]
fn test_nothing_is_materialized_up_front() {
    let (universe, _) = universe("42");
    assert_eq!(universe.cached_galaxies(), 0);

    let galaxy = universe.get_galaxy(1, 2, 3).unwrap();
    assert_eq!(universe.cached_galaxies(), 1);
    assert_eq!(galaxy.cached_systems(), 0);

    let system = galaxy.get_solar_system(galaxy.num_systems() - 1).unwrap();
    assert_eq!(galaxy.cached_systems(), 1);
    assert_eq!(system.cached_planets(), 0);
}

#[test]
fn test_growing_galaxy_admits_new_indices() {
    let (universe, clock) = universe("42");
    let galaxy = universe.get_galaxy(4_000_000, 4_000_000, 4_000_000).unwrap();
    let before = galaxy.num_systems();
    if before == galaxy.system_range().max {
        return;
    }
    assert!(galaxy.get_solar_system(before).unwrap_err().is_out_of_range());

    clock.advance_minutes(10.0);
    assert!(galaxy.get_solar_system(before).is_ok());
}

#[test]
fn test_dwarf_population_grows_from_its_base() {
    let (universe, clock) = universe("42");

    let dwarf = (0..200)
        .map(|i| universe.get_galaxy(3_000_000 + i, 3_000_000, 3_000_000).unwrap())
        .find(|g| g.class() == GalaxyClass::Dwarf)
        .expect("a dwarf galaxy among 200 neighbours");

    let first = dwarf.refresh();
    assert_eq!(first, dwarf.population_model().base());

    clock.advance_minutes(60.0);
    let second = dwarf.refresh();
    assert!(second >= first);
    assert!(second <= dwarf.system_range().max);
}

#[test]
fn test_siblings_do_not_collide() {
    let (universe, _) = universe("42");
    let galaxy = universe.get_galaxy(7, 7, 7).unwrap();
    let seeds: HashSet<_> = (0..200)
        .map(|i| *galaxy.get_solar_system(i).unwrap().seed())
        .collect();
    assert_eq!(seeds.len(), 200);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_planets_hold_their_invariants(
        x in 0i64..=10_000_000,
        y in 0i64..=10_000_000,
        z in 0i64..=10_000_000,
        index in 0u64..500,
    ) {
        let (universe, _) = universe("proptest");
        let galaxy = universe.get_galaxy(x, y, z).unwrap();
        let system = galaxy.get_solar_system(index).unwrap();

        for planet in system.planets() {
            let period = planet.rotation.period;
            prop_assert!(period.is_finite());
            prop_assert!(period >= Time::from_hours(MIN_ROTATION_HOURS));
            prop_assert!(period <= Time::from_days(MAX_ROTATION_DAYS));

            let unique: HashSet<&String> = planet.elements.iter().collect();
            prop_assert_eq!(unique.len(), planet.elements.len());
            prop_assert!((5..=10).contains(&planet.elements.len()));

            if planet.has_rings {
                prop_assert!(within_roche_limit(&planet.physique, &planet.orbit));
            }
        }
    }
}
