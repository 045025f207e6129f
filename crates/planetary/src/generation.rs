//! Planet derivation pipeline
//!
//! Physical draws (kind, atmosphere, size, orbit, rotation) read stream 0 of
//! the planet seed. Elements, life, rings and the initial angles each read
//! their own ChaCha stream so a decision never shifts the draws of another.

use std::f64::consts::TAU;

use rand::Rng;
use seed_chain::{Seed, SeedChain};
use units::PhysicalConstants;

use crate::atmosphere::Atmosphere;
use crate::elements::sample_elements;
use crate::kind::PlanetKind;
use crate::life::LifeForm;
use crate::orbit::Orbit;
use crate::physique::Physique;
use crate::planet::Planet;
use crate::rings::has_rings;
use crate::rotation::Rotation;

const PHYSICS_STREAM: u64 = 0;
const ELEMENTS_STREAM: u64 = 1;
const LIFE_STREAM: u64 = 2;
const RINGS_STREAM: u64 = 3;
const ANGLES_STREAM: u64 = 4;

/// Generate the planet occupying a slot of a solar system
///
/// The attribute seed is derived from the slot seed and the planet's name, so
/// the same slot and name always give the same planet.
pub fn generate_planet(
    chain: &SeedChain,
    constants: &PhysicalConstants,
    slot: &Seed,
    name: &str,
) -> Planet {
    let seed = chain.planet_attributes(slot, name);
    planet_from_seed(seed, name, constants)
}

/// Derive every attribute of a planet from an already derived seed
pub fn planet_from_seed(seed: Seed, name: &str, constants: &PhysicalConstants) -> Planet {
    let mut rng = seed.rng_stream(PHYSICS_STREAM);
    let kind = PlanetKind::sample(&mut rng);
    let atmosphere = Atmosphere::sample(kind, &mut rng);
    let physique = Physique::sample(kind, constants, &mut rng);
    let orbit = Orbit::sample(constants, &mut rng);
    let rotation = Rotation::derive(kind, &physique, &orbit, constants, &mut rng);

    let elements = sample_elements(kind, &mut seed.rng_stream(ELEMENTS_STREAM));
    let life = LifeForm::classify(
        kind,
        atmosphere,
        physique.surface_temperature,
        &elements,
        &mut seed.rng_stream(LIFE_STREAM),
    );
    let has_rings = has_rings(
        &physique,
        &orbit,
        &rotation,
        constants,
        &mut seed.rng_stream(RINGS_STREAM),
    );

    let mut angles = seed.rng_stream(ANGLES_STREAM);
    let initial_rotation_angle = angles.random_range(0.0..TAU);
    let initial_orbital_angle = angles.random_range(0.0..TAU);

    Planet {
        seed,
        name: name.to_string(),
        kind,
        atmosphere,
        physique,
        orbit,
        rotation,
        elements,
        life,
        has_rings,
        initial_rotation_angle,
        initial_orbital_angle,
    }
}
