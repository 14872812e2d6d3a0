//! State files
//!
//! Plain JSON, or JSON compressed with LZ4 when the file name ends in
//! `.lz4`. A plain state file is roughly 500 KB.

use super::CheckpointError;
use crate::rng::SuperKiss64;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk encoding of a state file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    /// JSON text
    Json,
    /// LZ4 block (size-prepended) around JSON text
    Lz4Json,
}

impl StateFormat {
    /// Select the format from a file name: `.lz4` means compressed
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("lz4") => StateFormat::Lz4Json,
            _ => StateFormat::Json,
        }
    }

    /// Encode a generator in this format
    pub fn encode(self, rng: &SuperKiss64) -> Result<Vec<u8>, CheckpointError> {
        let json = rng.to_json()?;
        Ok(match self {
            StateFormat::Json => json.into_bytes(),
            StateFormat::Lz4Json => compress_prepend_size(json.as_bytes()),
        })
    }

    /// Decode a generator from bytes in this format
    pub fn decode(self, bytes: &[u8]) -> Result<SuperKiss64, CheckpointError> {
        let json = match self {
            StateFormat::Json => bytes.to_vec(),
            StateFormat::Lz4Json => decompress_size_prepended(bytes)
                .map_err(|e| CheckpointError::Compression(e.to_string()))?,
        };
        let json = String::from_utf8(json).map_err(|e| {
            CheckpointError::Deserialization(format!("State is not UTF-8: {}", e))
        })?;
        SuperKiss64::from_json(&json)
    }
}

impl SuperKiss64 {
    /// Save the generator state to `path`
    ///
    /// The format follows [`StateFormat::from_path`]. The state is written
    /// to a sibling `.tmp` file and renamed over `path`, so an existing state
    /// file survives a failed write.
    pub fn save_state<P: AsRef<Path>>(&self, path: P) -> Result<(), CheckpointError> {
        let path = path.as_ref();
        let format = StateFormat::from_path(path);
        let bytes = format.encode(self)?;

        let staging = staging_path(path);
        if let Err(e) = fs::write(&staging, &bytes).and_then(|_| fs::rename(&staging, path)) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        tracing::info!(path = %path.display(), ?format, bytes = bytes.len(), "saved generator state");
        Ok(())
    }

    /// Create a generator from a state file written by [`save_state`](Self::save_state)
    pub fn from_state_file<P: AsRef<Path>>(path: P) -> Result<Self, CheckpointError> {
        let path = path.as_ref();
        let format = StateFormat::from_path(path);
        let bytes = fs::read(path)?;
        let rng = format.decode(&bytes)?;

        tracing::info!(path = %path.display(), ?format, cursor = rng.cursor(), "loaded generator state");
        Ok(rng)
    }

    /// Replace this generator's state with the one stored at `path`
    ///
    /// On error the current state is left untouched.
    pub fn load_state<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CheckpointError> {
        *self = Self::from_state_file(path)?;
        Ok(())
    }
}

/// Sibling file that receives a state before it replaces `path`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
