/// Deterministic RNG helpers.
///
/// Small and dependency-free so a run is reproducible from its seed alone. It
/// is **not** cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform sample in `[0, 1)` built from the top 53 bits.
    fn next_f64_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Bernoulli trial. `p <= 0` never fires, `p >= 1` always fires.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64_unit() < p
    }
}

/// SplitMix64: tiny, well-mixed generator with a single `u64` of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}
