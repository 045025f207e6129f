//! Planet derivation
//!
//! A planet is a pure function of its seed, its name and the physical
//! constants. [`generate_planet`] draws the kind and atmosphere, derives the
//! physical and orbital quantities, then decides elements, life and rings on
//! separate random streams of the same seed.

pub mod atmosphere;
pub mod elements;
pub mod generation;
pub mod kind;
pub mod life;
pub mod orbit;
pub mod physique;
pub mod planet;
pub mod rings;
pub mod rotation;

// Re-export key types at crate root
pub use atmosphere::{Atmosphere, AtmosphereFamily};
pub use elements::{sample_elements, PERIODIC_TABLE};
pub use generation::{generate_planet, planet_from_seed};
pub use kind::PlanetKind;
pub use life::{habitability_score, LifeForm};
pub use orbit::Orbit;
pub use physique::Physique;
pub use planet::Planet;
pub use rings::{has_rings, roche_limit, ring_probability};
pub use rotation::Rotation;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod rotation_test;
