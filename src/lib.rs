//! # Enough
//!
//! Core state management for a personal daily-allowance tracker. The user is
//! granted a recurring daily allowance; the balance is credited once per
//! calendar day and reduced when a spend is recorded.
//!
//! This crate owns the durable balance state and nothing else: rendering,
//! animation, and input handling belong to the embedding UI, which reads a
//! [`BalanceSnapshot`] and calls [`BalanceService::spend`] /
//! [`BalanceService::set_daily_allowance`].
//!
//! Construct an [`App`] once at startup and pass it down to whichever layer
//! needs it:
//!
//! ```no_run
//! use enough::App;
//!
//! let mut app = App::new_default()?;
//! app.balance_service.spend(4.50);
//! let snapshot = app.balance_service.snapshot();
//! # anyhow::Ok(())
//! ```

pub mod app;
pub mod domain;
pub mod storage;

pub use app::App;
pub use domain::balance_service::BalanceService;
pub use domain::models::BalanceSnapshot;
pub use storage::kv::{KvConnection, SettingsRepository};
pub use storage::traits::SettingsStorage;
