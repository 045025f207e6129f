//! The root of the hierarchy

use std::sync::Arc;

use planetary::Planet;
use seed_chain::SeedChain;
use tracing::info;
use units::PhysicalConstants;

use crate::address::Address;
use crate::cache::LazyMap;
use crate::clock::{Clock, SystemClock};
use crate::config::AtlasConfig;
use crate::context::Context;
use crate::coordinates::Coordinates;
use crate::error::{CosmosError, Result};
use crate::galaxy::Galaxy;
use crate::solar_system::SolarSystem;

#[derive(Debug)]
pub struct Universe {
    ctx: Arc<Context>,
    galaxies: LazyMap<Coordinates, Galaxy>,
}

impl Universe {
    /// A universe driven by the wall clock
    pub fn new(config: &AtlasConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &AtlasConfig, clock: Arc<dyn Clock>) -> Self {
        let ctx = Context {
            chain: config.seed_chain(),
            constants: config.physical_constants(),
            clock,
            cosmic_origin: config.cosmic_origin_time as f64,
        };
        info!(
            root = %ctx.chain.root(),
            cosmic_origin = config.cosmic_origin_time,
            fingerprint = %config.fingerprint(),
            "created universe"
        );
        Self {
            ctx: Arc::new(ctx),
            galaxies: LazyMap::new(),
        }
    }

    /// Galaxy at integer coordinates, derived on first access
    pub fn get_galaxy(&self, x: i64, y: i64, z: i64) -> Result<Arc<Galaxy>> {
        let coordinates = Coordinates::try_from_signed(x, y, z)?;
        Ok(self.galaxy_at(coordinates))
    }

    pub fn galaxy_at(&self, coordinates: Coordinates) -> Arc<Galaxy> {
        self.galaxies.get_or_derive(&coordinates, || {
            Galaxy::derive(Arc::clone(&self.ctx), coordinates)
        })
    }

    /// Walk an address down the hierarchy
    pub fn resolve(&self, address: &Address) -> Result<Location> {
        let Coordinates { x, y, z } = address.coordinates;
        let galaxy = self.galaxy_at(Coordinates::new(x, y, z)?);
        let Some(index) = address.system else {
            return Ok(Location::Galaxy(galaxy));
        };
        let system = galaxy.get_solar_system(index)?;
        let Some(name) = address.planet.as_deref() else {
            return Ok(Location::System { galaxy, system });
        };
        let (_, planet) = system
            .planet_by_name(name)
            .ok_or_else(|| CosmosError::NotFound {
                what: format!("planet '{name}' in system {index} at {}", address.coordinates),
            })?;
        Ok(Location::Planet {
            galaxy,
            system,
            planet,
        })
    }

    /// Number of galaxies materialized so far
    pub fn cached_galaxies(&self) -> usize {
        self.galaxies.len()
    }

    pub fn seed_chain(&self) -> &SeedChain {
        &self.ctx.chain
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.ctx.constants
    }

    pub fn cosmic_origin(&self) -> f64 {
        self.ctx.cosmic_origin
    }

    /// Seconds of cosmic time elapsed according to the universe's clock
    pub fn elapsed_seconds(&self) -> f64 {
        self.ctx.elapsed_seconds()
    }
}

/// Result of resolving an [`Address`]
#[derive(Debug, Clone)]
pub enum Location {
    Galaxy(Arc<Galaxy>),
    System {
        galaxy: Arc<Galaxy>,
        system: Arc<SolarSystem>,
    },
    Planet {
        galaxy: Arc<Galaxy>,
        system: Arc<SolarSystem>,
        planet: Arc<Planet>,
    },
}

impl Location {
    pub fn galaxy(&self) -> &Arc<Galaxy> {
        match self {
            Location::Galaxy(galaxy)
            | Location::System { galaxy, .. }
            | Location::Planet { galaxy, .. } => galaxy,
        }
    }

    pub fn system(&self) -> Option<&Arc<SolarSystem>> {
        match self {
            Location::Galaxy(_) => None,
            Location::System { system, .. } | Location::Planet { system, .. } => Some(system),
        }
    }

    pub fn planet(&self) -> Option<&Arc<Planet>> {
        match self {
            Location::Planet { planet, .. } => Some(planet),
            _ => None,
        }
    }
}
