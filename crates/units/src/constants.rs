//! The immutable bag of universal constants handed to every generator.

use serde::{Deserialize, Serialize};

use crate::length::{Length, AU_TO_M};
use crate::mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

/// Universal constants used by the derivation formulas
///
/// Created once per process and shared by reference. Values are the stylized
/// reference set the generators are calibrated against, not a validated
/// astrophysical data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalConstants {
    /// Speed of light (m/s)
    pub speed_of_light: f64,
    /// Gravitational constant G (m³ kg⁻¹ s⁻²)
    pub gravitational_constant: f64,
    /// Planck constant (J·s)
    pub planck_constant: f64,
    /// Fine structure constant (dimensionless)
    pub fine_structure_constant: f64,
    /// Reference Earth mass
    pub earth_mass: Mass,
    /// Reference Earth diameter
    pub earth_diameter: Length,
    /// Reference solar mass, the central mass of every orbit
    pub sun_mass: Mass,
    /// Reference tidal dissipation number Q
    pub tidal_dissipation_number: f64,
    /// Reference Love number k2
    pub love_number: f64,
    /// Earth surface gravity (m/s²), used to normalize planet gravity
    pub earth_gravity: f64,
    /// Length of one astronomical unit
    pub astronomical_unit: Length,
}

impl PhysicalConstants {
    /// The reference constant set
    pub fn standard() -> Self {
        Self {
            speed_of_light: 299_792_458.0,
            gravitational_constant: 6.67430e-11,
            planck_constant: 6.62607015e-34,
            fine_structure_constant: 1.0 / 137.0,
            earth_mass: Mass::from_kg(EARTH_MASS_KG),
            earth_diameter: Length::from_km(12_742.0),
            sun_mass: Mass::from_kg(SOLAR_MASS_KG),
            tidal_dissipation_number: 100.0,
            love_number: 0.3,
            earth_gravity: 9.81,
            astronomical_unit: Length::from_m(AU_TO_M),
        }
    }

    /// G·M☉, the standard gravitational parameter of the reference star
    pub fn solar_gravitational_parameter(&self) -> f64 {
        self.gravitational_constant * self.sun_mass.to_kg()
    }

    /// Returns the names of constants that cannot drive the derivation formulas.
    ///
    /// Every derived quantity divides by one of these, so zero, negative or
    /// non-finite values would poison the whole hierarchy with NaN.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("speedOfLight", self.speed_of_light),
            ("gravitationalConstant", self.gravitational_constant),
            ("earthMass", self.earth_mass.to_kg()),
            ("earthDiameter", self.earth_diameter.to_m()),
            ("sunMass", self.sun_mass.to_kg()),
            ("tidalDissipationNumber", self.tidal_dissipation_number),
            ("loveNumber", self.love_number),
            ("earthGravity", self.earth_gravity),
            ("astronomicalUnit", self.astronomical_unit.to_m()),
        ];

        checks
            .into_iter()
            .filter(|(_, value)| !value.is_finite() || *value <= 0.0)
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::standard()
    }
}
