#![forbid(unsafe_code)]

//! Seedable randomness.
//!
//! Simulations take a [`RandomSource`] instead of reaching for a global
//! generator, so tests can inject a seed (or a scripted sequence) and assert
//! exact output.

/// A stream of uniformly distributed `u32`s.
pub trait RandomSource {
    /// Next raw value.
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound`. Returns 0 when `bound` is 0.
    ///
    /// Uses modulo reduction; the bias is negligible for the tiny bounds the
    /// simulations use.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32() % bound
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Deterministic xorshift32 generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed used when none is supplied.
    pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

    /// Create a generator. A zero seed (the one fixed point of xorshift) is
    /// replaced by [`Self::DEFAULT_SEED`].
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::DEFAULT_SEED } else { seed },
        }
    }

    /// Derive a seed from a 64-bit value such as a frame number or a clock
    /// reading.
    pub const fn from_u64(value: u64) -> Self {
        let mixed = value.wrapping_mul(2_654_435_761);
        Self::new((mixed ^ (mixed >> 32)) as u32 | 1)
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
