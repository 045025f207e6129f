pub mod constants;
pub mod density;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod temperature_test;

pub use constants::PhysicalConstants;
pub use density::{sphere_volume, Density};
pub use length::Length;
pub use mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};
pub use temperature::Temperature;
pub use time::Time;
pub use velocity::{circular_orbital_velocity, Velocity};
