//! Life-form classification
//!
//! A planet's life form is a pure function of its already derived kind,
//! atmosphere, temperature and elements plus its own life stream. An
//! additive habitability score selects a tier of candidates; a fixed
//! sequence of rare overrides is checked before the uniform pick.

use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::Temperature;

use crate::atmosphere::Atmosphere;
use crate::kind::PlanetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeForm {
    None,
    Bacteria,
    Vegetation,
    AnimalLife,
    IntelligentLife,
    VegetableAnimals,
    SiliconBasedLife,
    NonPhysicalEntity,
    ConsciousGas,
    RoboticEntities,
    Divine,
}

impl LifeForm {
    pub const ALL: [LifeForm; 11] = [
        LifeForm::None,
        LifeForm::Bacteria,
        LifeForm::Vegetation,
        LifeForm::AnimalLife,
        LifeForm::IntelligentLife,
        LifeForm::VegetableAnimals,
        LifeForm::SiliconBasedLife,
        LifeForm::NonPhysicalEntity,
        LifeForm::ConsciousGas,
        LifeForm::RoboticEntities,
        LifeForm::Divine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LifeForm::None => "None",
            LifeForm::Bacteria => "Bacteria",
            LifeForm::Vegetation => "Vegetation",
            LifeForm::AnimalLife => "Animal Life",
            LifeForm::IntelligentLife => "Intelligent Life",
            LifeForm::VegetableAnimals => "Vegetable Animals",
            LifeForm::SiliconBasedLife => "Silicon-Based Life",
            LifeForm::NonPhysicalEntity => "Non-Physical Entity",
            LifeForm::ConsciousGas => "Conscious Gas",
            LifeForm::RoboticEntities => "Robotic Entities",
            LifeForm::Divine => "Have I just found God?",
        }
    }

    /// Parse a display name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|life| life.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn is_alive(&self) -> bool {
        *self != LifeForm::None
    }

    /// Classify a planet
    ///
    /// Overrides are checked in order: Vegetable Animals (top tier only),
    /// Silicon-Based Life, Non-Physical Entity, Conscious Gas, Robotic
    /// Entities, the divine. When none fires the tier is sampled uniformly.
    pub fn classify(
        kind: PlanetKind,
        atmosphere: Atmosphere,
        temperature: Temperature,
        elements: &[String],
        rng: &mut ChaChaRng,
    ) -> Self {
        let score = habitability_score(kind, atmosphere, temperature, elements);
        let tier = candidates(score);
        let has = |name: &str| elements.iter().any(|e| e == name);

        if score >= 60 && rng.random::<f64>() < 0.0005 {
            return LifeForm::VegetableAnimals;
        }
        if has("Silicon") && rng.random::<f64>() < 0.02 {
            return LifeForm::SiliconBasedLife;
        }
        if rng.random::<f64>() < 0.0001 {
            return LifeForm::NonPhysicalEntity;
        }
        if matches!(atmosphere, Atmosphere::Methane | Atmosphere::Ammonia)
            && rng.random::<f64>() < 0.00001
        {
            return LifeForm::ConsciousGas;
        }
        if matches!(kind, PlanetKind::Metallic | PlanetKind::Crystalline)
            && rng.random::<f64>() < 0.001
        {
            return LifeForm::RoboticEntities;
        }
        if kind == PlanetKind::Nebulous
            && atmosphere == Atmosphere::Plasma
            && has("Moscovium")
            && has("Z-Divinium")
            && rng.random::<f64>() < 0.00001
        {
            return LifeForm::Divine;
        }

        tier[rng.random_range(0..tier.len())]
    }
}

impl fmt::Display for LifeForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Additive habitability score from temperature, atmosphere, kind and elements
pub fn habitability_score(
    kind: PlanetKind,
    atmosphere: Atmosphere,
    temperature: Temperature,
    elements: &[String],
) -> i32 {
    let celsius = temperature.to_celsius();
    let mut score = match celsius {
        t if (-20.0..=50.0).contains(&t) => 20,
        t if (-100.0..-20.0).contains(&t) || (t > 50.0 && t <= 100.0) => 10,
        _ => -20,
    };

    score += match atmosphere {
        Atmosphere::OxygenRich | Atmosphere::Nitrogen => 30,
        Atmosphere::CarbonDioxide | Atmosphere::Methane => 10,
        _ => -10,
    };

    score += match kind {
        PlanetKind::Oceanic | PlanetKind::Swamp | PlanetKind::Aquifer => 30,
        PlanetKind::Rocky | PlanetKind::Forest | PlanetKind::Savannah => 20,
        PlanetKind::GasGiant | PlanetKind::FrozenGasGiant => -10,
        _ => 0,
    };

    for (element, bonus) in [("Water", 20), ("Carbon", 10), ("Silicon", 5)] {
        if elements.iter().any(|e| e == element) {
            score += bonus;
        }
    }

    score
}

/// Life forms a planet with the given score may host
pub fn candidates(score: i32) -> &'static [LifeForm] {
    match score {
        s if s >= 60 => &[
            LifeForm::None,
            LifeForm::IntelligentLife,
            LifeForm::AnimalLife,
            LifeForm::Vegetation,
            LifeForm::Bacteria,
            LifeForm::VegetableAnimals,
        ],
        s if s >= 40 => &[
            LifeForm::None,
            LifeForm::AnimalLife,
            LifeForm::Vegetation,
            LifeForm::Bacteria,
        ],
        s if s >= 20 => &[LifeForm::None, LifeForm::Bacteria, LifeForm::Vegetation],
        _ => &[LifeForm::None],
    }
}
