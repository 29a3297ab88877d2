use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// KvConnection manages the data directory that holds one file per stored key.
#[derive(Clone)]
pub struct KvConnection {
    base_directory: PathBuf,
}

impl KvConnection {
    /// Create a new connection with a base directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new connection in the platform default data directory,
    /// e.g. `~/.local/share/enough` on Linux.
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
        Self::new(data_dir.join("enough"))
    }

    /// Get the base directory for stored data.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of the file backing a stored key.
    pub(crate) fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(key)
    }
}
