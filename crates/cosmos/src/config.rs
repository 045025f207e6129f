//! Universe configuration
//!
//! The root seed phrase and the cosmic origin timestamp are all a universe
//! needs; physical constants may optionally be overridden. The configuration
//! is constructed explicitly and passed to [`Universe::new`](crate::Universe::new).
//!
//! ## Example `atlas.toml`
//!
//! ```toml
//! seed = "42"
//! cosmic_origin_time = 1700000000
//!
//! [constants]
//! gravitational_constant = 6.6743e-11
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use seed_chain::SeedChain;
use sha2::{Digest, Sha256};
use units::{Length, Mass, PhysicalConstants};

use crate::clock::SystemClock;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Root seed phrase, hashed into the root seed
    pub seed: String,
    /// Epoch seconds at which galaxy populations start growing
    pub cosmic_origin_time: i64,
    #[serde(default, skip_serializing_if = "ConstantOverrides::is_empty")]
    pub constants: ConstantOverrides,
}

impl AtlasConfig {
    pub fn new(seed: impl Into<String>, cosmic_origin_time: i64) -> Self {
        Self {
            seed: seed.into(),
            cosmic_origin_time,
            constants: ConstantOverrides::default(),
        }
    }

    /// A universe whose cosmic origin is the current wall-clock time
    pub fn starting_now(seed: impl Into<String>) -> Self {
        Self::new(seed, SystemClock::epoch_seconds())
    }

    pub fn with_constants(mut self, constants: ConstantOverrides) -> Self {
        self.constants = constants;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check the configuration can drive a universe
    ///
    /// - the seed phrase must not be blank
    /// - the cosmic origin must not be negative
    /// - every physical constant must be finite and positive after overrides
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed.trim().is_empty() {
            return Err(ConfigError::Invalid("seed phrase must not be empty".into()));
        }
        if self.cosmic_origin_time < 0 {
            return Err(ConfigError::Invalid(format!(
                "cosmic origin time must not be negative, got {}",
                self.cosmic_origin_time
            )));
        }

        let invalid = self.physical_constants().invalid_fields();
        if !invalid.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "physical constants must be finite and positive: {}",
                invalid.join(", ")
            )));
        }
        Ok(())
    }

    /// The reference constants with the configured overrides applied
    pub fn physical_constants(&self) -> PhysicalConstants {
        self.constants.apply(PhysicalConstants::standard())
    }

    pub fn seed_chain(&self) -> SeedChain {
        SeedChain::from_phrase(&self.seed)
    }

    /// Short hash identifying everything that shapes generated content
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.as_bytes());
        hasher.update(self.cosmic_origin_time.to_le_bytes());
        hasher.update(format!("{:?}", self.physical_constants()).as_bytes());
        hex::encode(&hasher.finalize()[..8])
    }
}

/// Optional replacements for the reference physical constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_of_light: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravitational_constant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planck_constant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_structure_constant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_diameter_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun_mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidal_dissipation_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub love_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astronomical_unit_m: Option<f64>,
}

impl ConstantOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace every overridden field of `base`
    pub fn apply(&self, base: PhysicalConstants) -> PhysicalConstants {
        PhysicalConstants {
            speed_of_light: self.speed_of_light.unwrap_or(base.speed_of_light),
            gravitational_constant: self
                .gravitational_constant
                .unwrap_or(base.gravitational_constant),
            planck_constant: self.planck_constant.unwrap_or(base.planck_constant),
            fine_structure_constant: self
                .fine_structure_constant
                .unwrap_or(base.fine_structure_constant),
            earth_mass: self.earth_mass_kg.map(Mass::from_kg).unwrap_or(base.earth_mass),
            earth_diameter: self
                .earth_diameter_km
                .map(Length::from_km)
                .unwrap_or(base.earth_diameter),
            sun_mass: self.sun_mass_kg.map(Mass::from_kg).unwrap_or(base.sun_mass),
            tidal_dissipation_number: self
                .tidal_dissipation_number
                .unwrap_or(base.tidal_dissipation_number),
            love_number: self.love_number.unwrap_or(base.love_number),
            earth_gravity: self.earth_gravity.unwrap_or(base.earth_gravity),
            astronomical_unit: self
                .astronomical_unit_m
                .map(Length::from_m)
                .unwrap_or(base.astronomical_unit),
        }
    }
}
