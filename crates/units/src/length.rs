use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Meters per astronomical unit
pub const AU_TO_M: f64 = 1.496e11;
/// Meters per kilometer
pub const KM_TO_M: f64 = 1e3;
/// Meters per megameter (thousand kilometers)
pub const MEGAMETER_TO_M: f64 = 1e6;

/// A physical length quantity using f64 precision.
///
/// Base unit is the meter. Planet diameters are generated in kilometers and
/// orbital radii in astronomical units, so both have dedicated constructors.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let diameter = Length::from_km(12_742.0);
///
/// assert!(orbit > diameter);
/// assert_eq!(diameter.to_m(), 12_742_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_m(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    /// Converts the length to megameters.
    ///
    /// Ring feasibility compares orbital distances on this scale.
    pub fn to_megameters(&self) -> f64 {
        self.0 / MEGAMETER_TO_M
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    /// Half of this length, e.g. radius from diameter.
    pub fn half(&self) -> Self {
        Self(self.0 / 2.0)
    }

    /// Raise to integer power (returns dimensionless f64 in m^n)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function (returns dimensionless f64 in m^n)
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
