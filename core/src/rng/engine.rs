//! SuperKISS64 lag-table engine and output conversions
//!
//! The generator keeps a table of [`QSIZE`] words that is regenerated in a
//! single add-with-carry pass whenever it runs dry. Every word handed out is
//! summed with one congruential and one xorshift step before it reaches the
//! caller.
//!
//! # Determinism
//!
//! Same seed → same sequence. A generator restored from a snapshot
//! continues with exactly the values the original would have produced.

use super::combiners::{cng, xs};

/// Number of words in the lag table
pub const QSIZE: usize = 20632;

/// SuperKISS64 generator
///
/// Period is more than 10^397524. Not cryptographically secure and not safe
/// for concurrent mutation.
///
/// # Example
/// ```
/// use superkiss64::SuperKiss64;
///
/// let mut a = SuperKiss64::new(12345);
/// let mut b = SuperKiss64::new(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperKiss64 {
    /// Carry threaded between refill passes
    pub(crate) carry: u64,

    /// Congruential combiner accumulator
    pub(crate) xcng: u64,

    /// Xorshift combiner accumulator
    pub(crate) xs: u64,

    /// Index of the next table word to emit; `QSIZE` means exhausted
    pub(crate) cursor: usize,

    /// Lag table, always `QSIZE` words
    pub(crate) q: Vec<u64>,

    /// Whether any seeding routine has run
    pub(crate) seeded: bool,
}

impl SuperKiss64 {
    /// Create a generator with a zeroed table and no seed
    ///
    /// The first draw seeds it with integer seed 1.
    pub fn unseeded() -> Self {
        Self {
            carry: 0,
            xcng: 0,
            xs: 0,
            cursor: 0,
            q: vec![0; QSIZE],
            seeded: false,
        }
    }

    /// Whether a seeding routine has run on this generator
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Position of the next table word to be emitted, in `[0, QSIZE]`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Regenerate the whole lag table and return its first word
    ///
    /// Iterations run in index order; each consumes the carry left by the
    /// previous one.
    fn refill(&mut self) -> u64 {
        let mut carry = self.carry;

        for word in self.q.iter_mut() {
            let t = *word;
            let h = carry & 1;
            let z = ((t << 41) >> 1)
                .wrapping_add((t << 39) >> 1)
                .wrapping_add(carry >> 1);
            carry = (t >> 23).wrapping_add(t >> 25).wrapping_add(z >> 63);
            *word = !((z << 1).wrapping_add(h));
        }

        self.carry = carry;
        self.cursor = 1;
        tracing::trace!(carry, "refilled lag table");

        self.q[0]
    }

    /// Generate next random u64 value
    ///
    /// This method never fails. An unseeded generator seeds itself with
    /// integer seed 1 first.
    pub fn next_u64(&mut self) -> u64 {
        if !self.seeded {
            self.seed(1);
        }

        let drawn = if self.cursor < QSIZE {
            let value = self.q[self.cursor];
            self.cursor += 1;
            value
        } else {
            self.refill()
        };

        self.xs = xs(self.xs);
        drawn
            .wrapping_add(cng(&mut self.xcng))
            .wrapping_add(self.xs)
    }

    /// Generate random i64 in range [0, 2^63)
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// The top 62 bits of a draw are placed under the exponent of 1.0,
    /// giving a value in [1.0, 2.0) with 52 random mantissa bits; 1.0 is then
    /// subtracted.
    ///
    /// # Example
    /// ```
    /// use superkiss64::SuperKiss64;
    ///
    /// let mut rng = SuperKiss64::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let bits = (self.next_u64() >> 2) | 0x3FF0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Generate random f32 in range [0.0, 1.0)
    ///
    /// Same construction as [`next_f64`](Self::next_f64) using the low 32
    /// bits of a draw.
    pub fn next_f32(&mut self) -> f32 {
        let bits = ((self.next_u64() as u32) >> 2) | 0x3F80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Fill `buf` with random bytes
    ///
    /// Each 8-byte chunk takes one draw in little-endian order. A trailing
    /// partial chunk takes the low bytes of one further draw.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Default for SuperKiss64 {
    fn default() -> Self {
        Self::unseeded()
    }
}

impl std::io::Read for SuperKiss64 {
    /// Always fills the whole buffer
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.fill_bytes(buf);
        Ok(buf.len())
    }
}
