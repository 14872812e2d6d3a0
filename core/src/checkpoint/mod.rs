//! Checkpoint - Save/Load Generator State
//!
//! Enables serialization and deserialization of the complete generator state
//! so a sequence can be paused and resumed.
//!
//! # Critical Invariants
//!
//! - **Fidelity**: A restored generator emits exactly the draws the original
//!   would have emitted, from any cursor position
//! - **Atomic Restore**: A failed restore leaves the target generator untouched
//! - **Integrity**: Table length, cursor range and checksum are verified
//!   before any state is accepted

mod storage;

pub use storage::StateFormat;

use crate::rng::{SuperKiss64, QSIZE};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Snapshot layout version written by this crate
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while saving or restoring state
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Lag table has {found} words, expected {expected}")]
    TableLength { found: usize, expected: usize },

    #[error("Cursor {cursor} outside [0, {max}]")]
    CursorOutOfRange { cursor: u64, max: usize },

    #[error("Checksum mismatch: stored {stored}, computed {computed}")]
    ChecksumMismatch { stored: String, computed: String },

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
///
/// Captures every field needed to resume a sequence from an arbitrary draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Layout version
    pub version: u32,

    /// Carry from the last refill pass
    pub carry: u64,

    /// Congruential combiner accumulator
    pub xcng: u64,

    /// Xorshift combiner accumulator
    pub xs: u64,

    /// Next table index to emit
    pub cursor: u64,

    /// Whether the generator had been seeded
    pub seeded: bool,

    /// Lag table
    pub q: Vec<u64>,

    /// SHA256 over all other fields (for validation)
    pub checksum: String,
}

impl From<&SuperKiss64> for GeneratorSnapshot {
    fn from(rng: &SuperKiss64) -> Self {
        let mut snapshot = GeneratorSnapshot {
            version: SNAPSHOT_VERSION,
            carry: rng.carry,
            xcng: rng.xcng,
            xs: rng.xs,
            cursor: rng.cursor as u64,
            seeded: rng.seeded,
            q: rng.q.clone(),
            checksum: String::new(),
        };
        snapshot.checksum = compute_checksum(&snapshot);
        snapshot
    }
}

impl TryFrom<GeneratorSnapshot> for SuperKiss64 {
    type Error = CheckpointError;

    fn try_from(snapshot: GeneratorSnapshot) -> Result<Self, Self::Error> {
        validate_snapshot(&snapshot)?;

        Ok(SuperKiss64 {
            carry: snapshot.carry,
            xcng: snapshot.xcng,
            xs: snapshot.xs,
            cursor: snapshot.cursor as usize,
            q: snapshot.q,
            seeded: snapshot.seeded,
        })
    }
}

// ============================================================================
// Checksum
// ============================================================================

/// Compute the SHA256 checksum of a snapshot
///
/// Hashes the little-endian encoding of every field except `checksum`
/// itself, in declaration order.
pub fn compute_checksum(snapshot: &GeneratorSnapshot) -> String {
    let mut hasher = Sha256::new();
    hasher.update(snapshot.version.to_le_bytes());
    hasher.update(snapshot.carry.to_le_bytes());
    hasher.update(snapshot.xcng.to_le_bytes());
    hasher.update(snapshot.xs.to_le_bytes());
    hasher.update(snapshot.cursor.to_le_bytes());
    hasher.update([snapshot.seeded as u8]);
    hasher.update((snapshot.q.len() as u64).to_le_bytes());
    for word in &snapshot.q {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks:
/// - Layout version
/// - Table length
/// - Cursor range
/// - Checksum
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<(), CheckpointError> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(CheckpointError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    if snapshot.q.len() != QSIZE {
        return Err(CheckpointError::TableLength {
            found: snapshot.q.len(),
            expected: QSIZE,
        });
    }

    if snapshot.cursor > QSIZE as u64 {
        return Err(CheckpointError::CursorOutOfRange {
            cursor: snapshot.cursor,
            max: QSIZE,
        });
    }

    let computed = compute_checksum(snapshot);
    if computed != snapshot.checksum {
        return Err(CheckpointError::ChecksumMismatch {
            stored: snapshot.checksum.clone(),
            computed,
        });
    }

    Ok(())
}

// ============================================================================
// Generator API
// ============================================================================

impl SuperKiss64 {
    /// Capture the complete generator state
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot::from(self)
    }

    /// Create a generator from a snapshot
    ///
    /// # Errors
    ///
    /// Any [`validate_snapshot`] failure.
    pub fn restore(snapshot: GeneratorSnapshot) -> Result<Self, CheckpointError> {
        SuperKiss64::try_from(snapshot).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected generator snapshot");
        })
    }

    /// Serialize the generator state to JSON
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(&self.snapshot()).map_err(|e| {
            CheckpointError::Serialization(format!("Failed to serialize state: {}", e))
        })
    }

    /// Create a generator from JSON produced by [`to_json`](Self::to_json)
    ///
    /// # Example
    ///
    /// ```
    /// use superkiss64::SuperKiss64;
    ///
    /// let mut rng = SuperKiss64::new(7);
    /// let json = rng.to_json().unwrap();
    /// let mut resumed = SuperKiss64::from_json(&json).unwrap();
    /// assert_eq!(rng.next_u64(), resumed.next_u64());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: GeneratorSnapshot = serde_json::from_str(json).map_err(|e| {
            CheckpointError::Deserialization(format!("Failed to parse state: {}", e))
        })?;
        Self::restore(snapshot)
    }

    /// Replace this generator's state with one parsed from JSON
    ///
    /// On error the current state is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), CheckpointError> {
        *self = Self::from_json(json)?;
        Ok(())
    }
}
