//! # Seeds
//!
//! Every random stream in the crate is derived from a `FractalSeed`.
//!
//! ## Determinism Guarantee
//!
//! Given the same seed, the chaos game produces **exactly** the same
//! points on any platform: the stream is ChaCha8, which is specified
//! bit-for-bit and does not depend on the host's word size or endianness.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic point sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FractalSeed(u64);

impl FractalSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Draws a fresh seed from the operating system.
    ///
    /// Runs seeded this way are only statistically reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    /// Sub-seed for one purpose (e.g. one job of a batch).
    ///
    /// SplitMix64 finalizer over the seed and a spread-out purpose. Every
    /// step is a bijection, so distinct purposes never share a sub-seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut z = self.0 ^ purpose.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }

    /// Builds the random stream for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}
