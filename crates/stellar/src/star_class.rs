use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// The six kinds of star a solar system can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StarClass {
    RedDwarf,
    YellowDwarf,
    BlueGiant,
    RedGiant,
    WhiteDwarf,
    NeutronStar,
}

impl StarClass {
    pub const ALL: [StarClass; 6] = [
        StarClass::RedDwarf,
        StarClass::YellowDwarf,
        StarClass::BlueGiant,
        StarClass::RedGiant,
        StarClass::WhiteDwarf,
        StarClass::NeutronStar,
    ];

    /// Draw a class uniformly
    pub fn sample(rng: &mut ChaChaRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StarClass::RedDwarf => "Red Dwarf",
            StarClass::YellowDwarf => "Yellow Dwarf",
            StarClass::BlueGiant => "Blue Giant",
            StarClass::RedGiant => "Red Giant",
            StarClass::WhiteDwarf => "White Dwarf",
            StarClass::NeutronStar => "Neutron Star",
        }
    }

    pub fn color(&self) -> StarColor {
        match self {
            StarClass::RedDwarf => StarColor::Red,
            StarClass::YellowDwarf => StarColor::Yellow,
            StarClass::BlueGiant => StarColor::Blue,
            StarClass::RedGiant => StarColor::Orange,
            StarClass::WhiteDwarf => StarColor::White,
            StarClass::NeutronStar => StarColor::Purple,
        }
    }

    /// Drawn radius relative to a yellow dwarf
    pub fn radius_factor(&self) -> f64 {
        match self {
            StarClass::RedDwarf => 0.5,
            StarClass::YellowDwarf => 1.0,
            StarClass::BlueGiant => 2.0,
            StarClass::RedGiant => 3.0,
            StarClass::WhiteDwarf => 0.3,
            StarClass::NeutronStar => 0.2,
        }
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Display color of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StarColor {
    Red,
    Yellow,
    Blue,
    Orange,
    White,
    Purple,
}

impl StarColor {
    pub fn name(&self) -> &'static str {
        match self {
            StarColor::Red => "red",
            StarColor::Yellow => "yellow",
            StarColor::Blue => "blue",
            StarColor::Orange => "orange",
            StarColor::White => "white",
            StarColor::Purple => "purple",
        }
    }

    /// sRGB triple used by renderers
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            StarColor::Red => (255, 72, 48),
            StarColor::Yellow => (255, 221, 102),
            StarColor::Blue => (112, 156, 255),
            StarColor::Orange => (255, 152, 64),
            StarColor::White => (244, 246, 255),
            StarColor::Purple => (168, 92, 255),
        }
    }
}

impl fmt::Display for StarColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
