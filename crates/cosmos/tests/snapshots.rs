use std::sync::Arc;

use cosmos::{AtlasConfig, GalaxySnapshot, ManualClock, Universe};
use serde_json::Value;

fn universe() -> Universe {
    Universe::with_clock(&AtlasConfig::new("42", 0), Arc::new(ManualClock::new(0.0)))
}

#[test]
fn test_galaxy_snapshot_json() {
    let galaxy = universe().get_galaxy(1, 2, 3).unwrap();
    let json = serde_json::to_value(galaxy.snapshot()).unwrap();

    assert_eq!(json["name"], Value::from(galaxy.name()));
    assert_eq!(json["numSystems"], Value::from(galaxy.num_systems()));
    assert_eq!(json["blackHoles"], Value::from(galaxy.black_holes()));
    assert_eq!(json["coordinates"]["y"], Value::from(2u64));
    assert_eq!(json["seed"].as_str().map(str::len), Some(64));

    let back: GalaxySnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, galaxy.snapshot());
}

#[test]
fn test_system_and_planet_json() {
    let system = universe()
        .get_galaxy(0, 0, 0)
        .unwrap()
        .get_solar_system(0)
        .unwrap();

    let json = serde_json::to_value(system.snapshot()).unwrap();
    assert_eq!(json["planetCount"], Value::from(system.planet_count()));
    assert!(json["stars"].as_array().is_some_and(|s| !s.is_empty()));

    let planet = system.get_planet(0).unwrap();
    let json = serde_json::to_value(&*planet).unwrap();
    assert_eq!(json["name"], Value::from(planet.name.as_str()));
    assert_eq!(json["hasRings"], Value::from(planet.has_rings));
    assert!(json["initialOrbitalAngle"].is_number());
    assert_eq!(
        json["elements"].as_array().map(Vec::len),
        Some(planet.elements.len())
    );
}
