//! # Domain Module
//!
//! Business logic for the tracker: the balance/allowance state manager and
//! the models it shares with the presentation layer.

pub mod balance_service;
pub mod models;

pub use balance_service::BalanceService;
pub use models::BalanceSnapshot;
