use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::kind::PlanetKind;

/// Dominant character of a planet's atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Atmosphere {
    Hydrogen,
    Helium,
    Methane,
    Ammonia,
    CarbonDioxide,
    Toxic,
    Ionic,
    Plasma,
    ExoticGases,
    WaterVapor,
    Thick,
    Thin,
    None,
    Breathable,
    Nitrogen,
    OxygenRich,
    SulfurDioxide,
    Superheated,
    Acidic,
    Frozen,
}

impl Atmosphere {
    /// Draw an atmosphere uniformly from the candidates of the kind's family
    pub fn sample(kind: PlanetKind, rng: &mut ChaChaRng) -> Self {
        let candidates = kind.atmosphere_family().candidates();
        candidates[rng.random_range(0..candidates.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Atmosphere::Hydrogen => "Hydrogen",
            Atmosphere::Helium => "Helium",
            Atmosphere::Methane => "Methane",
            Atmosphere::Ammonia => "Ammonia",
            Atmosphere::CarbonDioxide => "Carbon Dioxide",
            Atmosphere::Toxic => "Toxic",
            Atmosphere::Ionic => "Ionic",
            Atmosphere::Plasma => "Plasma",
            Atmosphere::ExoticGases => "Exotic Gases",
            Atmosphere::WaterVapor => "Water Vapor",
            Atmosphere::Thick => "Thick",
            Atmosphere::Thin => "Thin",
            Atmosphere::None => "None",
            Atmosphere::Breathable => "Breathable",
            Atmosphere::Nitrogen => "Nitrogen",
            Atmosphere::OxygenRich => "Oxygen-Rich",
            Atmosphere::SulfurDioxide => "Sulfur Dioxide",
            Atmosphere::Superheated => "Superheated",
            Atmosphere::Acidic => "Acidic",
            Atmosphere::Frozen => "Frozen",
        }
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which candidate list a planet kind draws its atmosphere from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtmosphereFamily {
    GasGiant,
    Terrestrial,
    Exotic,
}

impl AtmosphereFamily {
    pub fn candidates(&self) -> &'static [Atmosphere] {
        match self {
            AtmosphereFamily::GasGiant => &[
                Atmosphere::Hydrogen,
                Atmosphere::Helium,
                Atmosphere::Methane,
                Atmosphere::Ammonia,
                Atmosphere::CarbonDioxide,
                Atmosphere::Toxic,
                Atmosphere::Ionic,
                Atmosphere::Plasma,
                Atmosphere::ExoticGases,
                Atmosphere::WaterVapor,
            ],
            AtmosphereFamily::Terrestrial => &[
                Atmosphere::Thick,
                Atmosphere::Thin,
                Atmosphere::None,
                Atmosphere::Breathable,
                Atmosphere::CarbonDioxide,
                Atmosphere::Methane,
                Atmosphere::Nitrogen,
                Atmosphere::OxygenRich,
                Atmosphere::SulfurDioxide,
                Atmosphere::Superheated,
                Atmosphere::Acidic,
            ],
            AtmosphereFamily::Exotic => &[
                Atmosphere::ExoticGases,
                Atmosphere::Plasma,
                Atmosphere::Ionic,
                Atmosphere::None,
                Atmosphere::Frozen,
                Atmosphere::Acidic,
                Atmosphere::Toxic,
                Atmosphere::Superheated,
                Atmosphere::Hydrogen,
                Atmosphere::Helium,
            ],
        }
    }
}
