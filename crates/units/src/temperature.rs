use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// A physical temperature quantity using f64 precision.
///
/// Base unit is Kelvin. Surface temperature tables are authored in degrees
/// Celsius, so most callers go through `from_celsius` / `to_celsius`.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let surface = Temperature::from_celsius(15.0);
/// assert!((surface.to_kelvin() - 288.15).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_TO_KELVIN)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_TO_KELVIN
    }
}
