//! Exhaustive read-only traversal for search tooling
//!
//! A survey walks galaxies, their systems and every planet, keeping the
//! planets that match a [`PlanetQuery`]. Coordinates outside the universe
//! are counted as skipped, never fatal.

use std::sync::Arc;

use planetary::{LifeForm, Planet, PlanetKind};
use tracing::{debug, info};

use crate::address::Address;
use crate::coordinates::Coordinates;
use crate::galaxy::Galaxy;
use crate::universe::Universe;

/// Planet filter; built from at least one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetQuery {
    kind: Option<PlanetKind>,
    life: Option<LifeForm>,
    rings: Option<bool>,
}

impl PlanetQuery {
    pub fn kind(kind: PlanetKind) -> Self {
        Self {
            kind: Some(kind),
            life: None,
            rings: None,
        }
    }

    pub fn life(life: LifeForm) -> Self {
        Self {
            kind: None,
            life: Some(life),
            rings: None,
        }
    }

    pub fn rings(rings: bool) -> Self {
        Self {
            kind: None,
            life: None,
            rings: Some(rings),
        }
    }

    pub fn with_kind(mut self, kind: PlanetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_life(mut self, life: LifeForm) -> Self {
        self.life = Some(life);
        self
    }

    pub fn with_rings(mut self, rings: bool) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        self.kind.map_or(true, |kind| planet.kind == kind)
            && self.life.map_or(true, |life| planet.life == life)
            && self.rings.map_or(true, |rings| planet.has_rings == rings)
    }
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub coordinates: Coordinates,
    pub system_index: u64,
    pub planet_index: usize,
    pub planet: Arc<Planet>,
    pub address: Address,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyStats {
    pub galaxies_visited: u64,
    pub galaxies_skipped: u64,
    pub systems_visited: u64,
    pub planets_visited: u64,
    pub matches: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Survey {
    pub findings: Vec<Finding>,
    pub stats: SurveyStats,
}

impl Survey {
    /// Search systems `0..min(num_systems, system_limit)` of one galaxy
    pub fn galaxy(galaxy: &Galaxy, query: &PlanetQuery, system_limit: u64) -> Self {
        let mut survey = Self::default();
        survey.visit(galaxy, query, system_limit);
        survey
    }

    /// Search every galaxy in `coordinates`, skipping those outside the universe
    pub fn scan<I>(
        universe: &Universe,
        coordinates: I,
        query: &PlanetQuery,
        system_limit: u64,
    ) -> Self
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        let mut survey = Self::default();
        for (x, y, z) in coordinates {
            match universe.get_galaxy(x, y, z) {
                Ok(galaxy) => survey.visit(&galaxy, query, system_limit),
                Err(error) => {
                    debug!(x, y, z, %error, "no galaxy here");
                    survey.stats.galaxies_skipped += 1;
                }
            }
        }
        info!(
            galaxies = survey.stats.galaxies_visited,
            skipped = survey.stats.galaxies_skipped,
            planets = survey.stats.planets_visited,
            matches = survey.stats.matches,
            "survey finished"
        );
        survey
    }

    fn visit(&mut self, galaxy: &Galaxy, query: &PlanetQuery, system_limit: u64) {
        self.stats.galaxies_visited += 1;
        let coordinates = galaxy.coordinates();
        let systems = galaxy.refresh().min(system_limit);

        for system_index in 0..systems {
            let Ok(system) = galaxy.get_solar_system(system_index) else {
                break;
            };
            self.stats.systems_visited += 1;

            for (planet_index, planet) in system.planets().into_iter().enumerate() {
                self.stats.planets_visited += 1;
                if !query.matches(&planet) {
                    continue;
                }
                self.stats.matches += 1;
                self.findings.push(Finding {
                    coordinates,
                    system_index,
                    planet_index,
                    address: Address::planet(coordinates, system_index, &planet.name),
                    planet,
                });
            }
        }
        debug!(
            coordinates = %coordinates,
            systems,
            matches = self.stats.matches,
            "surveyed galaxy"
        );
    }
}
