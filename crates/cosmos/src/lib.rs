//! Deterministic universe atlas
//!
//! [`Universe`] is the single entry point: it validates coordinates, derives
//! galaxy seeds and caches every entity on first access. Galaxies lazily
//! create their solar systems, and solar systems lazily create their planets.
//! Nothing is persisted; the same root seed and the same moment always
//! reconstruct the same content.
//!
//! ```no_run
//! use cosmos::{AtlasConfig, Universe};
//!
//! let universe = Universe::new(&AtlasConfig::starting_now("42"));
//! let galaxy = universe.get_galaxy(0, 0, 0)?;
//! let system = galaxy.get_solar_system(0)?;
//! if let Some(planet) = system.get_planet(0) {
//!     println!("{} is a {} world", planet.name, planet.kind);
//! }
//! # Ok::<(), cosmos::CosmosError>(())
//! ```

pub mod address;
pub mod cache;
pub mod clock;
pub mod config;
mod context;
pub mod coordinates;
pub mod error;
pub mod galaxy;
pub mod population;
pub mod solar_system;
pub mod survey;
pub mod universe;

#[cfg(test)]
mod address_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod solar_system_test;

pub use address::Address;
pub use cache::LazyMap;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AtlasConfig, ConstantOverrides};
pub use coordinates::{Coordinates, MAX_COORDINATE, UNIVERSE_CENTER};
pub use error::{ConfigError, CosmosError, Result};
pub use galaxy::{Galaxy, GalaxySnapshot};
pub use population::{GalaxyClass, PopulationModel, SystemRange, VOID_AGE_SECONDS};
pub use solar_system::{SolarSystem, SolarSystemSnapshot};
pub use survey::{Finding, PlanetQuery, Survey, SurveyStats};
pub use universe::{Location, Universe};
