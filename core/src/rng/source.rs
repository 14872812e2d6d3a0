//! Generic random-source interface
//!
//! Higher-level utilities (permutations, bounded draws, shuffles) consume a
//! generator through these traits without knowing its internals.

use super::engine::SuperKiss64;

/// Minimal 64-bit random source
pub trait RandomSource {
    /// Uniform value in [0, 2^64)
    fn uint64(&mut self) -> u64;

    /// Uniform value in [0, 2^63)
    fn int63(&mut self) -> i64 {
        (self.uint64() >> 1) as i64
    }

    /// Reseed hook for wrappers that insist on calling one
    fn reseed(&mut self, seed: i64);
}

impl RandomSource for SuperKiss64 {
    fn uint64(&mut self) -> u64 {
        self.next_u64()
    }

    fn int63(&mut self) -> i64 {
        self.next_i63()
    }

    /// Ignored. A wrapper's 64-bit seed would discard the lag table; call
    /// [`SuperKiss64::seed`] directly to reseed.
    fn reseed(&mut self, _seed: i64) {}
}

impl rand::RngCore for SuperKiss64 {
    fn next_u32(&mut self) -> u32 {
        (SuperKiss64::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        SuperKiss64::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        SuperKiss64::fill_bytes(self, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_is_ignored() {
        let mut a = SuperKiss64::new(11);
        let mut b = SuperKiss64::new(11);

        a.reseed(999);
        for _ in 0..100 {
            assert_eq!(a.uint64(), b.next_u64());
        }
    }

    #[test]
    fn test_int63_matches_next_i63() {
        let mut a = SuperKiss64::new(11);
        let mut b = SuperKiss64::new(11);
        for _ in 0..100 {
            assert_eq!(a.int63(), b.next_i63());
        }
    }

    #[test]
    fn test_rng_core_next_u32_uses_high_half() {
        let mut a = SuperKiss64::new(3);
        let mut b = SuperKiss64::new(3);
        let word = a.next_u64();
        assert_eq!(rand::RngCore::next_u32(&mut b), (word >> 32) as u32);
    }
}
