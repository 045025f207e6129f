//! Name generation for the entities of the universe.
//!
//! Names are a pure function of an entity's seed. They read a dedicated
//! ChaCha stream, so naming never shifts any physical draw made from the
//! same seed.

pub mod generator;
mod words;

#[cfg(test)]
mod generator_test;

pub use generator::{generate_name, slug, NameKind};
