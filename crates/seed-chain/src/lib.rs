//! Hierarchical deterministic seed derivation
//!
//! Every entity in the universe (galaxy, solar system, star, planet) owns a
//! [`Seed`] derived from its parent's seed, a level-specific salt and a
//! context string. The seed feeds an independent ChaCha generator, so two
//! derivations never share a random stream.

pub mod chain;
pub mod seed;


pub use chain::{derive_seed, salt, Level, SeedChain};
pub use seed::{ParseSeedError, Seed};
