//! Entropy sources for non-reproducible seeding
//!
//! Used only by [`SuperKiss64::seed_from_entropy`](crate::SuperKiss64::seed_from_entropy),
//! never during normal draws. Failures are reported, never papered over with
//! a weaker source.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

/// Words fetched from the operating system per refill of [`OsEntropy`]
const OS_ENTROPY_WORDS: usize = 32;

/// Errors raised while reading entropy
#[derive(Debug, Error, PartialEq)]
pub enum EntropyError {
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),
}

/// Pull-based provider of 64-bit values with no reproducibility guarantee
pub trait EntropySource {
    /// Produce the next entropy word
    fn try_next_u64(&mut self) -> Result<u64, EntropyError>;
}

/// Operating-system entropy
///
/// High-quality, non-repeatable values for seeding. Not intended to make
/// anything built on top of it cryptographically secure.
///
/// # Example
/// ```
/// use superkiss64::{EntropySource, OsEntropy};
///
/// let mut entropy = OsEntropy::new();
/// let word = entropy.try_next_u64().expect("OS entropy available");
/// # let _ = word;
/// ```
#[derive(Debug)]
pub struct OsEntropy {
    buf: [u8; OS_ENTROPY_WORDS * 8],
    next: usize,
}

impl OsEntropy {
    pub fn new() -> Self {
        Self {
            buf: [0; OS_ENTROPY_WORDS * 8],
            next: OS_ENTROPY_WORDS * 8,
        }
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsEntropy {
    fn try_next_u64(&mut self) -> Result<u64, EntropyError> {
        if self.next >= self.buf.len() {
            OsRng
                .try_fill_bytes(&mut self.buf)
                .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
            self.next = 0;
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buf[self.next..self.next + 8]);
        self.next += 8;
        Ok(u64::from_le_bytes(word))
    }
}
