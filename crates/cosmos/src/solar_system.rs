//! Solar systems: stars plus lazily derived planets

use std::sync::{Arc, OnceLock};

use naming::{generate_name, slug, NameKind};
use planetary::{generate_planet, Planet};
use rand::Rng;
use seed_chain::Seed;
use serde::{Deserialize, Serialize};
use stellar::{Multiplicity, Star};
use tracing::debug;

use crate::context::Context;

pub const MIN_PLANETS: usize = 1;
pub const MAX_PLANETS: usize = 6;

#[derive(Debug, Clone)]
struct PlanetSlot {
    seed: Seed,
    name: String,
}

#[derive(Debug)]
pub struct SolarSystem {
    seed: Seed,
    index: u64,
    name: String,
    multiplicity: Multiplicity,
    stars: Vec<Star>,
    slots: Vec<PlanetSlot>,
    planets: Vec<OnceLock<Arc<Planet>>>,
    ctx: Arc<Context>,
}

impl SolarSystem {
    pub(crate) fn derive(ctx: Arc<Context>, galaxy: &Seed, index: u64) -> Self {
        let seed = ctx.chain.solar_system(galaxy, index);
        let mut rng = seed.rng();
        let planet_count = rng.random_range(MIN_PLANETS..=MAX_PLANETS);
        let multiplicity = Multiplicity::sample(&mut rng);

        let stars = (0..multiplicity.star_count())
            .map(|i| Star::from_seed(ctx.chain.star(&seed, i)))
            .collect::<Vec<_>>();
        let slots = (0..planet_count)
            .map(|i| {
                let slot = ctx.chain.planet_slot(&seed, i);
                PlanetSlot {
                    name: generate_name(&slot, NameKind::Planet),
                    seed: slot,
                }
            })
            .collect::<Vec<_>>();

        let name = generate_name(&seed, NameKind::System);
        debug!(
            index,
            name = %name,
            multiplicity = multiplicity.name(),
            planets = planet_count,
            "derived solar system"
        );

        Self {
            seed,
            index,
            name,
            multiplicity,
            stars,
            planets: slots.iter().map(|_| OnceLock::new()).collect(),
            slots,
            ctx,
        }
    }

    /// Planet at `index`, derived on first access; `None` past the last slot
    pub fn get_planet(&self, index: usize) -> Option<Arc<Planet>> {
        let slot = self.slots.get(index)?;
        let cell = self.planets.get(index)?;
        let planet = cell.get_or_init(|| {
            let planet = generate_planet(
                &self.ctx.chain,
                &self.ctx.constants,
                &slot.seed,
                &slot.name,
            );
            debug!(
                system = self.index,
                index,
                name = %planet.name,
                kind = %planet.kind,
                life = %planet.life,
                rings = planet.has_rings,
                "derived planet"
            );
            Arc::new(planet)
        });
        Some(Arc::clone(planet))
    }

    /// Every planet of the system, deriving those not yet materialized
    pub fn planets(&self) -> Vec<Arc<Planet>> {
        (0..self.slots.len())
            .filter_map(|i| self.get_planet(i))
            .collect()
    }

    /// Look a planet up by display name or by its slug
    pub fn planet_by_name(&self, name: &str) -> Option<(usize, Arc<Planet>)> {
        let wanted = name.to_lowercase();
        let index = self
            .slots
            .iter()
            .position(|slot| slot.name.to_lowercase() == wanted || slug(&slot.name) == wanted)?;
        self.get_planet(index).map(|planet| (index, planet))
    }

    pub fn planet_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn planet_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of planets materialized so far
    pub fn cached_planets(&self) -> usize {
        self.planets.iter().filter(|cell| cell.get().is_some()).count()
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn snapshot(&self) -> SolarSystemSnapshot {
        SolarSystemSnapshot {
            seed: self.seed,
            index: self.index,
            name: self.name.clone(),
            multiplicity: self.multiplicity,
            stars: self.stars.clone(),
            planet_count: self.slots.len(),
            planet_names: self.planet_names().map(str::to_owned).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystemSnapshot {
    pub seed: Seed,
    pub index: u64,
    pub name: String,
    pub multiplicity: Multiplicity,
    pub stars: Vec<Star>,
    pub planet_count: usize,
    pub planet_names: Vec<String>,
}
