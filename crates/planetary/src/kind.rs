//! The 27 planet kinds and the constant tables attached to each

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::atmosphere::AtmosphereFamily;

/// Categorical planet kind
///
/// Every kind carries its own diameter, density, temperature and rotation
/// ranges. The tables are stylized, not fitted to observed exoplanets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetKind {
    Rocky,
    GasGiant,
    Icy,
    Oceanic,
    Desert,
    Lava,
    Arid,
    Tundra,
    Swamp,
    Forest,
    Savannah,
    Cave,
    Crystalline,
    Anomaly,
    Metallic,
    Toxic,
    Radioactive,
    Magma,
    MoltenCore,
    Carbon,
    Diamond,
    SuperEarth,
    SubEarth,
    FrozenGasGiant,
    Nebulous,
    Aquifer,
    Exotic,
}

impl PlanetKind {
    pub const ALL: [PlanetKind; 27] = [
        PlanetKind::Rocky,
        PlanetKind::GasGiant,
        PlanetKind::Icy,
        PlanetKind::Oceanic,
        PlanetKind::Desert,
        PlanetKind::Lava,
        PlanetKind::Arid,
        PlanetKind::Tundra,
        PlanetKind::Swamp,
        PlanetKind::Forest,
        PlanetKind::Savannah,
        PlanetKind::Cave,
        PlanetKind::Crystalline,
        PlanetKind::Anomaly,
        PlanetKind::Metallic,
        PlanetKind::Toxic,
        PlanetKind::Radioactive,
        PlanetKind::Magma,
        PlanetKind::MoltenCore,
        PlanetKind::Carbon,
        PlanetKind::Diamond,
        PlanetKind::SuperEarth,
        PlanetKind::SubEarth,
        PlanetKind::FrozenGasGiant,
        PlanetKind::Nebulous,
        PlanetKind::Aquifer,
        PlanetKind::Exotic,
    ];

    /// Draw a kind uniformly
    pub fn sample(rng: &mut ChaChaRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetKind::Rocky => "Rocky",
            PlanetKind::GasGiant => "Gas Giant",
            PlanetKind::Icy => "Icy",
            PlanetKind::Oceanic => "Oceanic",
            PlanetKind::Desert => "Desert",
            PlanetKind::Lava => "Lava",
            PlanetKind::Arid => "Arid",
            PlanetKind::Tundra => "Tundra",
            PlanetKind::Swamp => "Swamp",
            PlanetKind::Forest => "Forest",
            PlanetKind::Savannah => "Savannah",
            PlanetKind::Cave => "Cave",
            PlanetKind::Crystalline => "Crystalline",
            PlanetKind::Anomaly => "Anomaly",
            PlanetKind::Metallic => "Metallic",
            PlanetKind::Toxic => "Toxic",
            PlanetKind::Radioactive => "Radioactive",
            PlanetKind::Magma => "Magma",
            PlanetKind::MoltenCore => "Molten Core",
            PlanetKind::Carbon => "Carbon",
            PlanetKind::Diamond => "Diamond",
            PlanetKind::SuperEarth => "Super Earth",
            PlanetKind::SubEarth => "Sub Earth",
            PlanetKind::FrozenGasGiant => "Frozen Gas Giant",
            PlanetKind::Nebulous => "Nebulous",
            PlanetKind::Aquifer => "Aquifer",
            PlanetKind::Exotic => "Exotic",
        }
    }

    /// Parse a display name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn atmosphere_family(&self) -> AtmosphereFamily {
        match self {
            PlanetKind::GasGiant
            | PlanetKind::FrozenGasGiant
            | PlanetKind::Nebulous
            | PlanetKind::Anomaly => AtmosphereFamily::GasGiant,
            PlanetKind::Rocky
            | PlanetKind::Oceanic
            | PlanetKind::Desert
            | PlanetKind::Lava
            | PlanetKind::Arid
            | PlanetKind::Tundra
            | PlanetKind::Swamp => AtmosphereFamily::Terrestrial,
            _ => AtmosphereFamily::Exotic,
        }
    }

    // =========================================================================
    // Size, density and temperature
    // =========================================================================

    /// Diameter range as a multiple of Earth's diameter
    pub fn diameter_range(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky | PlanetKind::Desert | PlanetKind::Arid => 0.7..=1.2,
            PlanetKind::Cave | PlanetKind::Crystalline => 0.7..=1.2,
            PlanetKind::GasGiant | PlanetKind::FrozenGasGiant => 10.0..=15.0,
            PlanetKind::Icy | PlanetKind::Tundra | PlanetKind::Toxic => 0.7..=1.5,
            PlanetKind::Carbon | PlanetKind::Diamond => 0.7..=1.5,
            PlanetKind::Oceanic
            | PlanetKind::Lava
            | PlanetKind::Swamp
            | PlanetKind::Forest
            | PlanetKind::Savannah
            | PlanetKind::Magma
            | PlanetKind::MoltenCore
            | PlanetKind::Aquifer => 0.8..=1.5,
            PlanetKind::Anomaly => 0.1..=3.0,
            PlanetKind::Metallic => 1.0..=2.5,
            PlanetKind::Radioactive | PlanetKind::SuperEarth => 1.0..=2.0,
            PlanetKind::SubEarth => 0.5..=1.0,
            PlanetKind::Nebulous => 5.0..=15.0,
            PlanetKind::Exotic => 0.5..=3.0,
        }
    }

    /// Bulk density range in kg/m³
    pub fn density_range(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky => 3000.0..=5500.0,
            PlanetKind::GasGiant => 500.0..=1600.0,
            PlanetKind::Icy => 500.0..=2000.0,
            PlanetKind::Oceanic | PlanetKind::Swamp | PlanetKind::Forest => 1000.0..=3000.0,
            PlanetKind::Savannah => 1000.0..=3000.0,
            PlanetKind::Desert | PlanetKind::Arid | PlanetKind::Cave => 2000.0..=4000.0,
            PlanetKind::Crystalline => 2000.0..=4000.0,
            PlanetKind::Lava => 3000.0..=5000.0,
            PlanetKind::Tundra => 1500.0..=3000.0,
            PlanetKind::Anomaly => 500.0..=10_000.0,
            PlanetKind::Metallic | PlanetKind::MoltenCore => 5000.0..=8000.0,
            PlanetKind::Toxic => 3000.0..=6000.0,
            PlanetKind::Radioactive | PlanetKind::Magma => 4000.0..=7000.0,
            PlanetKind::Carbon => 3500.0..=5000.0,
            PlanetKind::Diamond => 3000.0..=7000.0,
            PlanetKind::SuperEarth => 4000.0..=6000.0,
            PlanetKind::SubEarth => 3000.0..=5000.0,
            PlanetKind::FrozenGasGiant => 500.0..=1000.0,
            PlanetKind::Nebulous => 100.0..=300.0,
            PlanetKind::Aquifer => 2000.0..=3000.0,
            PlanetKind::Exotic => 1000.0..=20_000.0,
        }
    }

    /// Surface temperature range in °C
    pub fn temperature_range_celsius(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky => -150.0..=50.0,
            PlanetKind::GasGiant => -150.0..=150.0,
            PlanetKind::Icy => -150.0..=0.0,
            PlanetKind::Oceanic => 0.0..=40.0,
            PlanetKind::Desert => 50.0..=200.0,
            PlanetKind::Lava => 500.0..=1200.0,
            PlanetKind::Arid => 50.0..=150.0,
            PlanetKind::Tundra => -100.0..=0.0,
            PlanetKind::Swamp => 10.0..=50.0,
            PlanetKind::Forest => 10.0..=30.0,
            PlanetKind::Savannah => 20.0..=40.0,
            PlanetKind::Cave => 0.0..=40.0,
            PlanetKind::Crystalline | PlanetKind::Radioactive => -50.0..=500.0,
            PlanetKind::Anomaly | PlanetKind::Exotic => -273.0..=1500.0,
            PlanetKind::Metallic | PlanetKind::SuperEarth => -50.0..=400.0,
            PlanetKind::Toxic => 100.0..=400.0,
            PlanetKind::Magma => 700.0..=1500.0,
            PlanetKind::MoltenCore => 1000.0..=2000.0,
            PlanetKind::Carbon => -50.0..=300.0,
            PlanetKind::Diamond => -50.0..=1000.0,
            PlanetKind::SubEarth => -100.0..=300.0,
            PlanetKind::FrozenGasGiant => -200.0..=-50.0,
            PlanetKind::Nebulous => -200.0..=50.0,
            PlanetKind::Aquifer => -10.0..=50.0,
        }
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Base rotation time range in hours, before the inertia scaling
    pub fn base_rotation_hours(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky => 0.5..=12.0,
            PlanetKind::GasGiant => 2.0..=6.0,
            PlanetKind::Icy | PlanetKind::Desert | PlanetKind::Carbon => 1.0..=8.0,
            PlanetKind::Oceanic => 0.5..=5.0,
            PlanetKind::Lava => 2.0..=11.0,
            PlanetKind::Arid => 1.0..=10.0,
            PlanetKind::Tundra | PlanetKind::Forest | PlanetKind::Aquifer => 1.0..=6.0,
            PlanetKind::Swamp => 0.8..=7.0,
            PlanetKind::Savannah => 1.0..=7.0,
            PlanetKind::Cave => 0.5..=8.0,
            PlanetKind::Crystalline => 0.5..=12.0,
            PlanetKind::Anomaly => 0.1..=100.0,
            PlanetKind::Metallic | PlanetKind::Diamond | PlanetKind::SubEarth => 2.0..=12.0,
            PlanetKind::Toxic | PlanetKind::SuperEarth => 0.5..=10.0,
            PlanetKind::Radioactive => 1.0..=20.0,
            PlanetKind::Magma | PlanetKind::MoltenCore => 3.0..=15.0,
            PlanetKind::FrozenGasGiant => 3.0..=6.0,
            PlanetKind::Nebulous => 5.0..=12.0,
            PlanetKind::Exotic => 0.3..=30.0,
        }
    }

    /// Range of the Love number k2
    pub fn love_number_range(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky => 0.2..=0.4,
            PlanetKind::GasGiant | PlanetKind::FrozenGasGiant => 0.4..=0.6,
            PlanetKind::Diamond | PlanetKind::SuperEarth => 0.4..=0.6,
            PlanetKind::Icy | PlanetKind::Lava | PlanetKind::Tundra | PlanetKind::Cave => 0.3..=0.5,
            PlanetKind::Magma | PlanetKind::Carbon => 0.3..=0.5,
            PlanetKind::Oceanic | PlanetKind::Swamp => 0.2..=0.35,
            PlanetKind::Desert | PlanetKind::Arid => 0.25..=0.4,
            PlanetKind::Forest | PlanetKind::Savannah | PlanetKind::Aquifer => 0.2..=0.4,
            PlanetKind::Crystalline | PlanetKind::Radioactive => 0.3..=0.6,
            PlanetKind::Anomaly | PlanetKind::Exotic => 0.1..=0.8,
            PlanetKind::Metallic | PlanetKind::MoltenCore => 0.4..=0.7,
            PlanetKind::Toxic | PlanetKind::Nebulous => 0.2..=0.5,
            PlanetKind::SubEarth => 0.35..=0.5,
        }
    }

    /// Range of the tidal dissipation number Q
    pub fn dissipation_range(&self) -> RangeInclusive<f64> {
        match self {
            PlanetKind::Rocky | PlanetKind::Desert | PlanetKind::Arid => 50.0..=200.0,
            PlanetKind::GasGiant | PlanetKind::FrozenGasGiant => 1e4..=1e6,
            PlanetKind::Icy | PlanetKind::Carbon => 200.0..=600.0,
            PlanetKind::Oceanic
            | PlanetKind::Tundra
            | PlanetKind::Swamp
            | PlanetKind::Forest
            | PlanetKind::Savannah
            | PlanetKind::Aquifer => 100.0..=300.0,
            PlanetKind::Lava | PlanetKind::Magma => 100.0..=400.0,
            PlanetKind::Cave => 200.0..=500.0,
            PlanetKind::Crystalline | PlanetKind::Nebulous => 1000.0..=5000.0,
            PlanetKind::Anomaly | PlanetKind::Exotic => 1000.0..=1e7,
            PlanetKind::Metallic | PlanetKind::MoltenCore | PlanetKind::Diamond => 500.0..=2000.0,
            PlanetKind::Toxic => 100.0..=500.0,
            PlanetKind::Radioactive => 500.0..=3000.0,
            PlanetKind::SuperEarth => 200.0..=400.0,
            PlanetKind::SubEarth => 150.0..=300.0,
        }
    }

    /// Moment of inertia factor I / (m·r²)
    pub fn shape_factor(&self) -> f64 {
        match self {
            PlanetKind::GasGiant | PlanetKind::FrozenGasGiant => 0.4,
            PlanetKind::Metallic
            | PlanetKind::Radioactive
            | PlanetKind::Magma
            | PlanetKind::MoltenCore
            | PlanetKind::Carbon
            | PlanetKind::Diamond => 0.35,
            PlanetKind::Crystalline | PlanetKind::Anomaly | PlanetKind::Exotic => 0.5,
            _ => 0.3,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Elements characteristic of the kind; two of them are always present
    pub fn canonical_elements(&self) -> [&'static str; 4] {
        match self {
            PlanetKind::Rocky => ["Silicon", "Iron", "Magnesium", "Oxygen"],
            PlanetKind::GasGiant | PlanetKind::Nebulous => ["Hydrogen", "Helium", "Neon", "Argon"],
            PlanetKind::Icy => ["Nitrogen", "Oxygen", "Hydrogen", "Sulfur"],
            PlanetKind::Oceanic | PlanetKind::Aquifer => {
                ["Oxygen", "Hydrogen", "Sodium", "Chlorine"]
            }
            PlanetKind::Desert => ["Silicon", "Oxygen", "Iron", "Aluminum"],
            PlanetKind::Lava | PlanetKind::Magma => ["Magnesium", "Silicon", "Iron", "Sulfur"],
            PlanetKind::Arid => ["Silicon", "Oxygen", "Iron", "Calcium"],
            PlanetKind::Tundra => ["Nitrogen", "Oxygen", "Carbon", "Iron"],
            PlanetKind::Swamp => ["Carbon", "Oxygen", "Phosphorus", "Nitrogen"],
            PlanetKind::Forest => ["Oxygen", "Carbon", "Nitrogen", "Phosphorus"],
            PlanetKind::Savannah => ["Oxygen", "Carbon", "Silicon", "Phosphorus"],
            PlanetKind::Cave => ["Silicon", "Calcium", "Iron", "Carbon"],
            PlanetKind::Crystalline => ["Silicon", "Carbon", "Oxygen", "Iron"],
            PlanetKind::Anomaly => ["Copernicium", "Nihonium", "Flerovium", "Moscovium"],
            PlanetKind::Metallic => ["Iron", "Nickel", "Titanium", "Cobalt"],
            PlanetKind::Toxic => ["Sulfur", "Chlorine", "Phosphorus", "Fluorine"],
            PlanetKind::Radioactive => ["Uranium", "Thorium", "Plutonium", "Radium"],
            PlanetKind::MoltenCore => ["Iron", "Nickel", "Magnesium", "Sulfur"],
            PlanetKind::Carbon => ["Carbon", "Oxygen", "Silicon", "Iron"],
            PlanetKind::Diamond => ["Carbon", "Silicon", "Nitrogen", "Oxygen"],
            PlanetKind::SuperEarth => ["Iron", "Magnesium", "Silicon", "Oxygen"],
            PlanetKind::SubEarth => ["Silicon", "Iron", "Carbon", "Oxygen"],
            PlanetKind::FrozenGasGiant => ["Hydrogen", "Helium", "Neon", "Methane"],
            PlanetKind::Exotic => ["Oganesson", "Livermorium", "Tennessine", "Flerovium"],
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
