//! Level salts and the derivation step

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::seed::Seed;

/// Hierarchy level of a derived seed
///
/// Each level salts its derivations with the root seed encoded a different
/// number of times. The counts only need to differ between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Galaxy,
    SolarSystem,
    Star,
    Planet,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Galaxy, Level::SolarSystem, Level::Star, Level::Planet];

    /// Number of encoding passes applied to the root seed for this level
    pub const fn iterations(self) -> usize {
        match self {
            Level::Galaxy => 12,
            Level::SolarSystem => 8,
            Level::Star => 2,
            Level::Planet => 4,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Level::Galaxy => 0,
            Level::SolarSystem => 1,
            Level::Star => 2,
            Level::Planet => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Galaxy => "galaxy",
            Level::SolarSystem => "solar-system",
            Level::Star => "star",
            Level::Planet => "planet",
        };
        f.write_str(name)
    }
}

/// Encode the root seed's text form with base64 `iterations` times
///
/// Zero iterations returns the text form unchanged.
pub fn salt(root: &Seed, iterations: usize) -> String {
    let mut text = root.to_string();
    for _ in 0..iterations {
        text = STANDARD.encode(text.as_bytes());
    }
    text
}

/// Derive a seed from the root, a level's iteration count and a context
///
/// `context` carries the stable identity of the entity (parent seed plus
/// coordinates, index or name). Identical inputs always give the identical
/// seed; distinct contexts give unrelated seeds.
pub fn derive_seed(root: &Seed, iterations: usize, context: &str) -> Seed {
    derive_with_salt(&salt(root, iterations), context)
}

fn derive_with_salt(salt: &str, context: &str) -> Seed {
    Seed::digest(format!("{salt}-{context}"))
}

/// Root seed plus the precomputed salt of every level
#[derive(Debug, Clone)]
pub struct SeedChain {
    root: Seed,
    salts: [String; 4],
}

impl SeedChain {
    pub fn new(root: Seed) -> Self {
        let salts = Level::ALL.map(|level| salt(&root, level.iterations()));
        Self { root, salts }
    }

    /// Build a chain from a configured seed phrase
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(Seed::from_phrase(phrase))
    }

    pub fn root(&self) -> &Seed {
        &self.root
    }

    pub fn salt(&self, level: Level) -> &str {
        &self.salts[level.slot()]
    }

    /// Same result as [`derive_seed`] with this chain's root, without re-encoding
    pub fn derive(&self, level: Level, context: &str) -> Seed {
        derive_with_salt(self.salt(level), context)
    }

    /// Seed of the galaxy at integer coordinates
    pub fn galaxy(&self, x: u64, y: u64, z: u64) -> Seed {
        self.derive(Level::Galaxy, &format!("{}-{x}-{y}-{z}", self.root))
    }

    /// Seed of solar system `index` inside the galaxy seeded by `galaxy`
    pub fn solar_system(&self, galaxy: &Seed, index: u64) -> Seed {
        self.derive(Level::SolarSystem, &format!("{galaxy}-{index}"))
    }

    /// Seed of star slot `index` of a solar system
    pub fn star(&self, system: &Seed, index: usize) -> Seed {
        self.derive(Level::Star, &format!("{system}-{index}"))
    }

    /// Seed of planet slot `index` of a solar system
    pub fn planet_slot(&self, system: &Seed, index: usize) -> Seed {
        self.derive(Level::Planet, &format!("{system}-{index}"))
    }

    /// Seed of a planet's attribute draws, keyed by its slot seed and name
    pub fn planet_attributes(&self, slot: &Seed, name: &str) -> Seed {
        self.derive(Level::Planet, &format!("{slot}-{name}"))
    }
}
