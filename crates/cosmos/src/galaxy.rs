//! Galaxies and their lazily derived solar systems

use std::sync::Arc;

use naming::{generate_name, NameKind};
use parking_lot::Mutex;
use rand::Rng;
use seed_chain::Seed;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cache::LazyMap;
use crate::context::Context;
use crate::coordinates::Coordinates;
use crate::error::{CosmosError, Result};
use crate::population::{is_void_age, GalaxyClass, PopulationModel, SystemRange};
use crate::solar_system::SolarSystem;

const SPECIALS_STREAM: u64 = 1;

/// Mutable part of a galaxy; only moves forward in time
#[derive(Debug, Clone, Copy)]
struct GalaxyState {
    class: GalaxyClass,
    num_systems: u64,
    black_holes: u32,
    pulsars: u32,
    quasars: u32,
}

impl GalaxyState {
    fn collapse(&mut self) {
        self.class = GalaxyClass::SingularityVoid;
        self.num_systems = 0;
        self.black_holes = 0;
        self.pulsars = 0;
        self.quasars = 0;
    }
}

#[derive(Debug)]
pub struct Galaxy {
    seed: Seed,
    name: String,
    coordinates: Coordinates,
    birth_class: GalaxyClass,
    model: PopulationModel,
    distance_to_center: f64,
    state: Mutex<GalaxyState>,
    systems: LazyMap<u64, SolarSystem>,
    ctx: Arc<Context>,
}

impl Galaxy {
    pub(crate) fn derive(ctx: Arc<Context>, coordinates: Coordinates) -> Self {
        let seed = ctx
            .chain
            .galaxy(coordinates.x, coordinates.y, coordinates.z);
        let mut rng = seed.rng();
        let birth_class = GalaxyClass::sample(&mut rng);
        let range = birth_class.sample_range(&mut rng);
        let model = PopulationModel::new(range, coordinates.proximity());

        let elapsed = ctx.elapsed_seconds();
        let num_systems = model.systems_at(elapsed);
        let mut state = GalaxyState {
            class: birth_class,
            num_systems,
            black_holes: 0,
            pulsars: 0,
            quasars: 0,
        };
        if is_void_age(elapsed) || num_systems == 0 {
            state.collapse();
        } else {
            let mut specials = seed.rng_stream(SPECIALS_STREAM);
            state.black_holes = specials.random_range(1..=10);
            state.pulsars = specials.random_range(0..=50);
            state.quasars = specials.random_range(0..=2);
        }

        let galaxy = Self {
            name: generate_name(&seed, NameKind::Galaxy),
            seed,
            coordinates,
            birth_class,
            model,
            distance_to_center: coordinates.distance_to_center(),
            state: Mutex::new(state),
            systems: LazyMap::new(),
            ctx,
        };
        debug!(
            coordinates = %coordinates,
            name = %galaxy.name,
            class = %state.class,
            num_systems = state.num_systems,
            "derived galaxy"
        );
        galaxy
    }

    /// Recompute the population from the clock and return it
    ///
    /// The count never decreases. Past the void age the galaxy collapses to a
    /// Singularity Void and stays one.
    pub fn refresh(&self) -> u64 {
        let elapsed = self.ctx.elapsed_seconds();
        let mut state = self.state.lock();
        if state.class.is_void() {
            return 0;
        }

        let computed = self.model.systems_at(elapsed);
        if is_void_age(elapsed) || computed == 0 {
            warn!(
                coordinates = %self.coordinates,
                name = %self.name,
                elapsed,
                "galaxy collapsed into a singularity void"
            );
            state.collapse();
            return 0;
        }

        state.num_systems = state.num_systems.max(computed);
        trace!(
            coordinates = %self.coordinates,
            num_systems = state.num_systems,
            elapsed,
            "refreshed galaxy population"
        );
        state.num_systems
    }

    /// Solar system `index`, derived on first access
    pub fn get_solar_system(&self, index: u64) -> Result<Arc<SolarSystem>> {
        let available = self.refresh();
        if index >= available {
            return Err(CosmosError::SystemIndexOutOfRange { index, available });
        }
        Ok(self.systems.get_or_derive(&index, || {
            SolarSystem::derive(Arc::clone(&self.ctx), &self.seed, index)
        }))
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Current class; differs from the birth class only after collapse
    pub fn class(&self) -> GalaxyClass {
        self.state.lock().class
    }

    pub fn birth_class(&self) -> GalaxyClass {
        self.birth_class
    }

    pub fn system_range(&self) -> SystemRange {
        self.model.range
    }

    pub fn population_model(&self) -> PopulationModel {
        self.model
    }

    pub fn proximity(&self) -> f64 {
        self.model.proximity
    }

    pub fn distance_to_center(&self) -> f64 {
        self.distance_to_center
    }

    /// Population as of the last refresh
    pub fn num_systems(&self) -> u64 {
        self.state.lock().num_systems
    }

    pub fn black_holes(&self) -> u32 {
        self.state.lock().black_holes
    }

    pub fn pulsars(&self) -> u32 {
        self.state.lock().pulsars
    }

    pub fn quasars(&self) -> u32 {
        self.state.lock().quasars
    }

    /// Number of solar systems materialized so far
    pub fn cached_systems(&self) -> usize {
        self.systems.len()
    }

    pub fn snapshot(&self) -> GalaxySnapshot {
        let state = *self.state.lock();
        GalaxySnapshot {
            seed: self.seed,
            name: self.name.clone(),
            coordinates: self.coordinates,
            class: state.class,
            system_range: self.model.range,
            proximity: self.model.proximity,
            distance_to_center: self.distance_to_center,
            num_systems: state.num_systems,
            black_holes: state.black_holes,
            pulsars: state.pulsars,
            quasars: state.quasars,
        }
    }
}

/// Read-only view of a galaxy at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxySnapshot {
    pub seed: Seed,
    pub name: String,
    pub coordinates: Coordinates,
    pub class: GalaxyClass,
    pub system_range: SystemRange,
    pub proximity: f64,
    pub distance_to_center: f64,
    pub num_systems: u64,
    pub black_holes: u32,
    pub pulsars: u32,
    pub quasars: u32,
}
