//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

/// Trait defining the interface for settings storage operations.
///
/// The store is a flat map from string keys to string values. Each key is
/// independently readable and writable; `multi_set` writes several keys in
/// one call but makes no atomicity guarantee across them.
pub trait SettingsStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// An absent key yields `Ok(None)`, distinct from an empty value.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, creating the key if it does not exist.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Write several key/value pairs in order.
    ///
    /// A failure leaves earlier entries written and later entries untouched.
    fn multi_set(&self, entries: &[(&str, String)]) -> Result<()>;
}
