//! Save and restore using `MessagePack`.
//!
//! A snapshot bundles the world registry and the session state, everything
//! needed to resume a playthrough. The parser and dispatcher are rebuilt on
//! load rather than saved.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use gloam_model::{Error, GameState, Result};
use gloam_world::World;

/// One saved playthrough.
#[derive(Serialize, Deserialize)]
pub struct Snapshot {
    /// The full object and room registry, including placements.
    pub world: World,
    /// Player position, counters, and flags.
    pub state: GameState,
}

impl Snapshot {
    /// Bundles a world and state for saving.
    #[must_use]
    pub fn new(world: World, state: GameState) -> Self {
        Self { world, state }
    }

    /// Serializes the snapshot to bytes using `MessagePack` format.
    ///
    /// Uses named serialization to preserve struct field names.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserializes a snapshot from `MessagePack` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Saves the snapshot to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to, or if
    /// serialization fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|e| {
            Error::Io(format!(
                "failed to create file '{}': {e}",
                path.as_ref().display()
            ))
        })?;

        let mut writer = BufWriter::new(file);
        let bytes = self.to_bytes()?;

        writer.write_all(&bytes).map_err(|e| {
            Error::Io(format!(
                "failed to write to file '{}': {e}",
                path.as_ref().display()
            ))
        })?;

        writer.flush().map_err(|e| {
            Error::Io(format!(
                "failed to flush file '{}': {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Loads a snapshot from a `MessagePack` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if deserialization
    /// fails.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::Io(format!(
                "failed to open file '{}': {e}",
                path.as_ref().display()
            ))
        })?;

        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();

        reader.read_to_end(&mut bytes).map_err(|e| {
            Error::Io(format!(
                "failed to read file '{}': {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_bytes(&bytes)
    }
}
