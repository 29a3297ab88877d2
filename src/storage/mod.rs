//! # Storage Module
//!
//! Handles persistence for the tracker. The domain layer depends only on the
//! [`SettingsStorage`] trait; the file-backed implementation lives in [`kv`]
//! and can be swapped for a stricter backend (write-ahead queue, embedded
//! database) without touching the mutation API.

pub mod kv;
pub mod traits;

pub use traits::SettingsStorage;
