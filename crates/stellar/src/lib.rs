//! Stars of a solar system: class, display color and multiplicity.

pub mod multiplicity;
pub mod star;
pub mod star_class;

#[cfg(test)]
mod multiplicity_test;
#[cfg(test)]
mod star_class_test;

pub use multiplicity::Multiplicity;
pub use star::Star;
pub use star_class::{StarClass, StarColor};
