//! The shuffle bag: a seeded, bit-reproducible draw sequence.
//!
//! Wraps the reference 32-bit MT19937 so that identical seeds always yield
//! identical draw sequences — the single correctness property everything
//! else in the crate rests on. Draws are consumed strictly in call order;
//! there is no peek and no rewind. One bag belongs to exactly one render
//! invocation and is never shared across concurrent renders.
use rand_mt::Mt as Mt19937GenRand32;

use crate::seed::{fold_seed, Seed};

/// Scale factor mapping a 32-bit word into [0, 1).
const U32_RANGE: f64 = 4_294_967_296.0; // 2^32

/// A deterministic pseudo-random sequence generator.
#[derive(Debug, Clone)]
pub struct ShuffleBag {
    mt: Mt19937GenRand32,
    draws: u64,
}

impl ShuffleBag {
    /// Creates a bag seeded from `seed` (folded to the generator's 32-bit
    /// width, see [`fold_seed`]).
    pub fn new(seed: Seed) -> Self {
        Self {
            mt: Mt19937GenRand32::new(fold_seed(seed)),
            draws: 0,
        }
    }

    /// Next raw 32-bit word from the generator.
    pub fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.mt.next_u32()
    }

    /// Next draw in [0, 1).
    ///
    /// Computed as `next_u32() / 2^32`; every 32-bit numerator is exactly
    /// representable in an `f64` mantissa, so the value is identical on any
    /// conforming platform.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Number of draws consumed so far. Diagnostic only.
    pub fn draws_consumed(&self) -> u64 {
        self.draws
    }
}
