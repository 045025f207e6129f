//! Galaxy coordinates inside the bounded universe cube

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CosmosError, Result};

/// Largest valid value on every axis
pub const MAX_COORDINATE: u64 = 10_000_000;

/// Reference center; galaxies near it are more populous and grow faster
pub const UNIVERSE_CENTER: u64 = 4_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Coordinates {
    /// Validated coordinates; every axis must be within `0..=MAX_COORDINATE`
    pub fn new(x: u64, y: u64, z: u64) -> Result<Self> {
        if x > MAX_COORDINATE || y > MAX_COORDINATE || z > MAX_COORDINATE {
            return Err(out_of_range(saturate(x), saturate(y), saturate(z)));
        }
        Ok(Self { x, y, z })
    }

    /// Validate raw query input, rejecting negative axes too
    pub fn try_from_signed(x: i64, y: i64, z: i64) -> Result<Self> {
        let axis = |v: i64| u64::try_from(v).ok().filter(|v| *v <= MAX_COORDINATE);
        match (axis(x), axis(y), axis(z)) {
            (Some(x), Some(y), Some(z)) => Ok(Self { x, y, z }),
            _ => Err(out_of_range(x, y, z)),
        }
    }

    pub const fn center() -> Self {
        Self {
            x: UNIVERSE_CENTER,
            y: UNIVERSE_CENTER,
            z: UNIVERSE_CENTER,
        }
    }

    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        let dz = self.z as f64 - other.z as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn distance_to_center(&self) -> f64 {
        self.distance_to(&Self::center())
    }

    /// Space diagonal measured from the center
    pub fn max_distance() -> f64 {
        3f64.sqrt() * UNIVERSE_CENTER as f64
    }

    /// 1 at the center, falling linearly to 0 at the space diagonal
    pub fn proximity(&self) -> f64 {
        (1.0 - self.distance_to_center() / Self::max_distance()).max(0.0)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

fn saturate(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn out_of_range(x: i64, y: i64, z: i64) -> CosmosError {
    CosmosError::CoordinatesOutOfRange {
        x,
        y,
        z,
        max: MAX_COORDINATE,
    }
}
