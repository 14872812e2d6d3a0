//! Generator configuration
//!
//! A JSON description of how to construct a generator, so the seeding
//! choice can live next to the rest of a run's settings.
//!
//! ```json
//! { "seed": { "type": "values", "values": [1, 2, 3] } }
//! ```

use crate::checkpoint::CheckpointError;
use crate::entropy::EntropyError;
use crate::rng::SuperKiss64;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration or building its generator
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entropy seeding failed: {0}")]
    Entropy(#[from] EntropyError),

    #[error("State restore failed: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// How the generator is seeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Integer seed (0 selects the reference initialization)
    Integer { seed: i64 },

    /// Sequence of seed values
    Values { values: Vec<u64> },

    /// Operating-system entropy
    Entropy,

    /// Resume from a saved state file
    StateFile { path: PathBuf },
}

impl Default for SeedStrategy {
    fn default() -> Self {
        SeedStrategy::Integer { seed: 1 }
    }
}

/// Generator construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub seed: SeedStrategy,
}

impl GeneratorConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Construct the configured generator
    pub fn build(&self) -> Result<SuperKiss64, ConfigError> {
        let rng = match &self.seed {
            SeedStrategy::Integer { seed } => SuperKiss64::new(*seed),
            SeedStrategy::Values { values } => SuperKiss64::from_values(values),
            SeedStrategy::Entropy => SuperKiss64::from_entropy()?,
            SeedStrategy::StateFile { path } => SuperKiss64::from_state_file(path)?,
        };
        Ok(rng)
    }
}
