//! # Application Context
//!
//! Wires storage and domain services together. The context is constructed
//! once at application start and passed by reference to whichever layer
//! needs it; there is no process-wide singleton.

use anyhow::Result;
use std::path::Path;

use crate::domain::balance_service::BalanceService;
use crate::storage::kv::{KvConnection, SettingsRepository};

/// Application context holding every service the presentation layer needs.
pub struct App {
    pub balance_service: BalanceService<SettingsRepository>,
}

impl App {
    /// Create the context over an explicit data directory and perform the
    /// initial load.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::with_connection(KvConnection::new(data_dir)?)
    }

    /// Create the context in the platform default data directory.
    pub fn new_default() -> Result<Self> {
        Self::with_connection(KvConnection::new_default()?)
    }

    fn with_connection(connection: KvConnection) -> Result<Self> {
        let repository = SettingsRepository::new(connection);
        let mut balance_service = BalanceService::new(repository);
        balance_service.load();
        Ok(Self { balance_service })
    }
}
