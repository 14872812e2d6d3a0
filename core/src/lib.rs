//! SuperKISS64 - immense-period 64-bit pseudorandom number generator
//!
//! George Marsaglia's SuperKISS64 combines a 20632-word lagged
//! add-with-carry table with a congruential and an xorshift generator.
//! Its period is 5·2^1320480·(2^64-1), more than 10^397524, which makes it
//! suitable for exhaustive shuffles of sets far too large for the state space
//! of an ordinary 64-bit generator.
//!
//! # Architecture
//!
//! - **rng**: Combiner primitives, lag-table engine, seeding and outputs
//! - **entropy**: Operating-system entropy used for non-reproducible seeding
//! - **checkpoint**: Snapshot/restore with bit-identical resumption
//! - **config**: JSON description of how to construct a generator
//!
//! # Critical Invariants
//!
//! 1. All arithmetic is wrapping `u64`
//! 2. Same seed produces the same sequence, forever
//! 3. A restored generator continues exactly where the saved one stopped
//!
//! Not suitable for cryptographic use. A single instance is not safe for
//! concurrent mutation; wrap it in a lock or use one instance per consumer.
//!
//! # Example
//! ```
//! use superkiss64::SuperKiss64;
//!
//! let mut rng = SuperKiss64::new(20210603);
//! let word = rng.next_u64();
//! let unit = rng.next_f64();
//! assert!((0.0..1.0).contains(&unit));
//! # let _ = word;
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod entropy;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot, StateFormat};
pub use config::{ConfigError, GeneratorConfig, SeedStrategy};
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use rng::{RandomSource, SuperKiss64, VerifyError, QSIZE};
