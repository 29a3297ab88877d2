//! # Key-Value Storage Module
//!
//! File-backed implementation of the [`SettingsStorage`] trait: one file per
//! key under a data directory, written atomically (temp file, then rename).
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── enough_balance              ← decimal number as a string
//! ├── enough_daily_allowance      ← decimal number as a string
//! └── enough_last_allowance_date  ← ISO calendar date (YYYY-MM-DD)
//! ```
//!
//! [`SettingsStorage`]: crate::storage::traits::SettingsStorage

pub mod connection;
pub mod settings_repository;

pub use connection::KvConnection;
pub use settings_repository::SettingsRepository;
