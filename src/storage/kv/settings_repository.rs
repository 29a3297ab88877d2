//! # Settings Repository
//!
//! File-based settings storage: each key is backed by a file of the same name
//! in the data directory, holding the value verbatim. Writes go through a
//! temp file followed by a rename so a crashed write never leaves a
//! half-written value behind. There is no atomicity across keys.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;

use super::connection::KvConnection;
use crate::storage::traits::SettingsStorage;

/// File-per-key implementation of [`SettingsStorage`].
#[derive(Clone)]
pub struct SettingsRepository {
    connection: KvConnection,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    /// Keys name files directly, so anything that would escape the data
    /// directory is rejected.
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(anyhow::anyhow!("Invalid storage key: {:?}", key));
        }
        Ok(())
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;
        let path = self.connection.key_path(key);

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move {} into place", temp_path.display()))?;

        debug!("Saved {} to {}", key, path.display());
        Ok(())
    }
}

impl SettingsStorage for SettingsRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;
        let path = self.connection.key_path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(anyhow::Error::new(e).context(format!("Failed to read {}", path.display())))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_key(key, value)
    }

    fn multi_set(&self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.write_key(key, value)?;
        }
        Ok(())
    }
}
