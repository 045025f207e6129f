use std::sync::Arc;

use seed_chain::SeedChain;
use units::PhysicalConstants;

use crate::clock::Clock;

/// Everything a derivation reads, shared by the whole hierarchy
#[derive(Debug)]
pub(crate) struct Context {
    pub chain: SeedChain,
    pub constants: PhysicalConstants,
    pub clock: Arc<dyn Clock>,
    /// Epoch seconds at which the universe started growing
    pub cosmic_origin: f64,
}

impl Context {
    /// Seconds since the cosmic origin, as read from the clock
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.now() - self.cosmic_origin
    }
}
