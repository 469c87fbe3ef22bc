/// Uniform random source injected into the resolver and the animator.
///
/// Both consumers only need `[0, 1)` doubles; keeping the seam this narrow
/// lets tests drive every draw from a fixed seed.
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[0, limit)`. `limit` must be finite and positive.
    fn next_f64_below(&mut self, limit: f64) -> f64 {
        self.next_f64_01() * limit
    }

    /// Uniform value in `[lo, hi)`.
    fn next_f64_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64_01() * (hi - lo)
    }

    /// Uniform index in `[0, len)`. `len` must be > 0.
    fn next_index(&mut self, len: usize) -> usize {
        let i = (self.next_f64_01() * len as f64) as usize;
        i.min(len - 1)
    }
}

/// SplitMix64 generator; the crate's default [`RandomSource`].
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }
}

impl RandomSource for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
