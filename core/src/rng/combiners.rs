//! Combiner primitives mixed into every SuperKISS64 output
//!
//! Both are tiny full-period generators over 64-bit state. On their own they
//! are weak; added to the lag-table output they break up its lattice
//! structure.

/// Multiplier of the congruential combiner
pub(crate) const CNG_MULTIPLIER: u64 = 6906969069;

/// Increment of the congruential combiner
pub(crate) const CNG_INCREMENT: u64 = 123;

/// Advance the congruential accumulator and return its new value
///
/// `xcng = 6906969069 * xcng + 123 (mod 2^64)`
#[inline]
pub(crate) fn cng(xcng: &mut u64) -> u64 {
    *xcng = CNG_MULTIPLIER.wrapping_mul(*xcng).wrapping_add(CNG_INCREMENT);
    *xcng
}

/// One xorshift step (13, 17, 43)
///
/// A bijection on `u64` whose only fixed point is 0.
#[inline]
pub(crate) fn xs(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 43;
    x
}
