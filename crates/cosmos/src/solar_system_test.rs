use std::sync::Arc;

use naming::slug;

use crate::clock::ManualClock;
use crate::config::AtlasConfig;
use crate::solar_system::{SolarSystem, MAX_PLANETS, MIN_PLANETS};
use crate::universe::Universe;

fn universe() -> Universe {
    let clock = Arc::new(ManualClock::new(0.0));
    Universe::with_clock(&AtlasConfig::new("42", 0), clock)
}

fn system(universe: &Universe, index: u64) -> Arc<SolarSystem> {
    universe
        .get_galaxy(0, 0, 0)
        .unwrap()
        .get_solar_system(index)
        .unwrap()
}

#[test]
fn test_planet_and_star_counts() {
    let universe = universe();
    for index in 0..50 {
        let system = system(&universe, index);
        assert!((MIN_PLANETS..=MAX_PLANETS).contains(&system.planet_count()));
        assert_eq!(system.stars().len(), system.multiplicity().star_count());
        assert_eq!(system.index(), index);
    }
}

#[test]
fn test_planets_are_lazy() {
    let universe = universe();
    let system = system(&universe, 1);
    assert_eq!(system.cached_planets(), 0);

    let first = system.get_planet(0).unwrap();
    let again = system.get_planet(0).unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(system.cached_planets(), 1);
}

#[test]
fn test_missing_planet_is_none() {
    let universe = universe();
    let system = system(&universe, 2);
    assert!(system.get_planet(system.planet_count()).is_none());
    assert!(system.get_planet(usize::MAX).is_none());
}

#[test]
fn test_planets_follow_slot_names() {
    let universe = universe();
    let system = system(&universe, 3);
    let names: Vec<String> = system.planet_names().map(str::to_owned).collect();
    let planets = system.planets();

    assert_eq!(planets.len(), system.planet_count());
    assert_eq!(system.cached_planets(), system.planet_count());
    for (planet, name) in planets.iter().zip(&names) {
        assert_eq!(&planet.name, name);
    }
}

#[test]
fn test_planet_by_name() {
    let universe = universe();
    let system = system(&universe, 4);
    let name = system.planet_names().next().unwrap().to_owned();

    let (_, exact) = system.planet_by_name(&name).unwrap();
    let (_, upper) = system.planet_by_name(&name.to_uppercase()).unwrap();
    let (_, slugged) = system.planet_by_name(&slug(&name)).unwrap();

    assert_eq!(exact.name, name);
    assert!(Arc::ptr_eq(&exact, &upper));
    assert!(Arc::ptr_eq(&exact, &slugged));
    assert!(system.planet_by_name("no such world").is_none());
}

#[test]
fn test_system_is_reproducible() {
    let a = universe();
    let b = universe();
    for index in [0, 7, 499] {
        let first = system(&a, index);
        let second = system(&b, index);
        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.planets(), second.planets());
    }
}

#[test]
fn test_siblings_differ() {
    let universe = universe();
    assert_ne!(system(&universe, 0).seed(), system(&universe, 1).seed());
}

#[test]
fn test_snapshot() {
    let universe = universe();
    let system = system(&universe, 5);
    let snapshot = system.snapshot();

    assert_eq!(snapshot.seed, *system.seed());
    assert_eq!(snapshot.name, system.name());
    assert_eq!(snapshot.planet_count, system.planet_count());
    assert_eq!(snapshot.planet_names.len(), system.planet_count());
    assert_eq!(snapshot.stars, system.stars());
}
