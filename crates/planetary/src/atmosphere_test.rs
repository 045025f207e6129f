use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::atmosphere::{Atmosphere, AtmosphereFamily};
use crate::kind::PlanetKind;

#[test]
fn test_family_assignment() {
    assert_eq!(PlanetKind::GasGiant.atmosphere_family(), AtmosphereFamily::GasGiant);
    assert_eq!(PlanetKind::Anomaly.atmosphere_family(), AtmosphereFamily::GasGiant);
    assert_eq!(PlanetKind::Swamp.atmosphere_family(), AtmosphereFamily::Terrestrial);
    assert_eq!(PlanetKind::Forest.atmosphere_family(), AtmosphereFamily::Exotic);
    assert_eq!(PlanetKind::Exotic.atmosphere_family(), AtmosphereFamily::Exotic);
}

#[test]
fn test_families_cover_twenty_atmospheres() {
    let all: HashSet<Atmosphere> = [
        AtmosphereFamily::GasGiant,
        AtmosphereFamily::Terrestrial,
        AtmosphereFamily::Exotic,
    ]
    .iter()
    .flat_map(|family| family.candidates().iter().copied())
    .collect();

    assert_eq!(all.len(), 20);
}

#[test]
fn test_sample_stays_in_family() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for kind in PlanetKind::ALL {
        for _ in 0..20 {
            let atmosphere = Atmosphere::sample(kind, &mut rng);
            assert!(kind.atmosphere_family().candidates().contains(&atmosphere));
        }
    }
}

#[test]
fn test_display_names() {
    assert_eq!(Atmosphere::OxygenRich.to_string(), "Oxygen-Rich");
    assert_eq!(Atmosphere::CarbonDioxide.to_string(), "Carbon Dioxide");
    assert_eq!(Atmosphere::None.to_string(), "None");
}
