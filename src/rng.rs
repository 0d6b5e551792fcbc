//! Seed-locked deterministic randomness.
//!
//! Offline, reproducible rendering rules out an external RNG crate and any
//! global entropy: a given profile seed must produce byte-identical noise
//! buffers and shift directions on every run. splitmix64 is small, fast and
//! passes through every 64-bit state exactly once.

/// Deterministic PRNG (splitmix64).
#[derive(Debug, Clone, Copy)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next pseudo-random `u64`.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)` with full f32 mantissa resolution.
    #[inline(always)]
    pub fn next_unit(&mut self) -> f32 {
        ((self.next_u64() >> 40) as f32) * (1.0 / (1u64 << 24) as f32)
    }

    /// Uniform byte, one independent draw per call.
    #[inline(always)]
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

/// Smooth 1D value noise in `[0, 1)`.
///
/// Hashes the two integer lattice points around `t` and blends them with a
/// smoothstep weight. Stands in for the engine-provided gradient noise the
/// RGB shift direction was sampled from.
pub fn value_noise_1d(seed: u64, t: f32) -> f32 {
    let cell = t.floor();
    let frac = t - cell;
    let base = cell as i64 as u64;

    let a = lattice_unit(seed, base);
    let b = lattice_unit(seed, base.wrapping_add(1));
    let w = frac * frac * (3.0 - 2.0 * frac);
    a * (1.0 - w) + b * w
}

#[inline(always)]
fn lattice_unit(seed: u64, cell: u64) -> f32 {
    let mut rng = SplitMix64::from_seed(seed ^ cell.wrapping_mul(0xD134_2543_DE82_EF95));
    rng.next_unit()
}

#[cfg(test)]
mod tests {
    use super::{value_noise_1d, SplitMix64};

    #[test]
    fn same_seed_produces_identical_streams() {
        let mut a = SplitMix64::from_seed(42);
        let mut b = SplitMix64::from_seed(42);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SplitMix64::from_seed(1);
        let mut b = SplitMix64::from_seed(2);
        let matches = (0..32).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(matches, 0);
    }

    #[test]
    fn next_unit_stays_in_half_open_range() {
        let mut rng = SplitMix64::from_seed(7);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!(v >= 0.0 && v < 1.0, "out of range: {v}");
        }
    }

    #[test]
    fn value_noise_is_continuous_across_cells() {
        // Values just either side of a lattice point must nearly agree.
        let left = value_noise_1d(9, 2.999_9);
        let right = value_noise_1d(9, 3.000_1);
        assert!((left - right).abs() < 0.01);
    }

    #[test]
    fn value_noise_is_deterministic_per_seed() {
        assert_eq!(value_noise_1d(5, 1.25), value_noise_1d(5, 1.25));
        assert_ne!(value_noise_1d(5, 1.25), value_noise_1d(6, 1.25));
    }
}
