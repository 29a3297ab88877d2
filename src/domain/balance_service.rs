//! Balance and allowance state for the daily-allowance tracker.
//!
//! This service owns the durable balance and allowance values, detects day
//! rollover at load time, and credits the daily allowance exactly once per
//! calendar day (keyed by calendar date equality, never by elapsed time).
//!
//! Mutations update in-memory state first and persist best-effort: a storage
//! failure is logged and the session keeps running on the in-memory values.

use chrono::{Local, NaiveDate};
use log::{error, info, warn};

use crate::domain::models::{validate_amount, BalanceSnapshot};
use crate::storage::traits::SettingsStorage;

const BALANCE_KEY: &str = "enough_balance";
const DAILY_ALLOWANCE_KEY: &str = "enough_daily_allowance";
const LAST_ALLOWANCE_DATE_KEY: &str = "enough_last_allowance_date";

/// Allowance credited per day until the user configures their own amount.
const DEFAULT_DAILY_ALLOWANCE: f64 = 10.0;

/// Canonical storage format for the allowance date. Older stores wrote
/// unpadded month/day; chrono parses either form with this format string, so
/// legacy values keep working while writes are always zero-padded ISO.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Single source of truth for the balance and the daily allowance.
///
/// Construct with [`BalanceService::new`], call [`BalanceService::load`] once,
/// then mutate through [`BalanceService::spend`] and
/// [`BalanceService::set_daily_allowance`]. The presentation layer reads
/// state via [`BalanceService::snapshot`].
pub struct BalanceService<S: SettingsStorage> {
    repository: S,
    balance: f64,
    daily_allowance: f64,
    last_allowance_date: Option<NaiveDate>,
    is_loading: bool,
    today_allowance_added: bool,
}

impl<S: SettingsStorage> BalanceService<S> {
    /// Create an unloaded service over the given storage backend.
    pub fn new(repository: S) -> Self {
        Self {
            repository,
            balance: 0.0,
            daily_allowance: DEFAULT_DAILY_ALLOWANCE,
            last_allowance_date: None,
            is_loading: true,
            today_allowance_added: false,
        }
    }

    /// Load persisted state and settle today's allowance.
    ///
    /// Reads the three persisted values (missing or unreadable keys fall back
    /// to defaults), credits the daily allowance if it has not been credited
    /// on the current calendar date, and persists the result. Never fails:
    /// storage errors are logged and the session continues on whatever state
    /// is available. Intended to be called exactly once, at startup.
    pub fn load(&mut self) {
        self.load_for_date(Local::now().date_naive());
    }

    fn load_for_date(&mut self, today: NaiveDate) {
        info!("Loading balance state from storage");

        self.balance = self.read_amount(BALANCE_KEY).unwrap_or(0.0);
        self.daily_allowance = match self.read_amount(DAILY_ALLOWANCE_KEY) {
            Some(amount) if amount > 0.0 => amount,
            Some(amount) => {
                warn!(
                    "Stored daily allowance {} is not positive, using default",
                    amount
                );
                DEFAULT_DAILY_ALLOWANCE
            }
            None => DEFAULT_DAILY_ALLOWANCE,
        };
        self.last_allowance_date = self.read_date(LAST_ALLOWANCE_DATE_KEY);

        match self.last_allowance_date {
            Some(last) if last == today => {
                info!(
                    "Allowance already credited today, balance {:.2}",
                    self.balance
                );
                self.today_allowance_added = true;
            }
            Some(last) if last > today => {
                // The stored date never moves backward, so a clock rollback
                // skips the credit and leaves the date alone.
                warn!(
                    "Last allowance date {} is ahead of today {}, skipping credit",
                    last, today
                );
                self.today_allowance_added = true;
            }
            _ => {
                self.balance += self.daily_allowance;
                self.last_allowance_date = Some(today);
                self.today_allowance_added = true;
                info!(
                    "New day detected, credited allowance {:.2}, balance {:.2}",
                    self.daily_allowance, self.balance
                );

                let entries = [
                    (BALANCE_KEY, self.balance.to_string()),
                    (
                        LAST_ALLOWANCE_DATE_KEY,
                        today.format(DATE_FORMAT).to_string(),
                    ),
                ];
                if let Err(e) = self.repository.multi_set(&entries) {
                    error!("Failed to persist allowance rollover: {:#}", e);
                }
            }
        }

        self.is_loading = false;
    }

    /// Record a spend.
    ///
    /// Non-positive or non-finite amounts are rejected without touching
    /// state. There is no floor: the balance may go negative.
    pub fn spend(&mut self, amount: f64) {
        if let Err(e) = validate_amount(amount) {
            warn!("Rejected spend of {}: {}", amount, e);
            return;
        }

        self.balance -= amount;
        info!("Spent {:.2}, balance {:.2}", amount, self.balance);
        self.persist(BALANCE_KEY, &self.balance.to_string());
    }

    /// Change the amount credited each day.
    ///
    /// Non-positive or non-finite amounts are rejected. The new amount takes
    /// effect at the next rollover; the current balance and the last credit
    /// date are untouched.
    pub fn set_daily_allowance(&mut self, amount: f64) {
        if let Err(e) = validate_amount(amount) {
            warn!("Rejected daily allowance of {}: {}", amount, e);
            return;
        }

        self.daily_allowance = amount;
        info!("Daily allowance set to {:.2}", amount);
        self.persist(DAILY_ALLOWANCE_KEY, &amount.to_string());
    }

    /// Read-only view of the current state for the presentation layer.
    pub fn snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot {
            balance: self.balance,
            daily_allowance: self.daily_allowance,
            is_loading: self.is_loading,
            today_allowance_added: self.today_allowance_added,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn daily_allowance(&self) -> f64 {
        self.daily_allowance
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn today_allowance_added(&self) -> bool {
        self.today_allowance_added
    }

    /// Best-effort durable write. On failure the in-memory value stays
    /// authoritative for the running session and the durable copy lags.
    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.repository.set(key, value) {
            error!("Failed to persist {}: {:#}", key, e);
        }
    }

    fn read_amount(&self, key: &str) -> Option<f64> {
        let raw = self.read_key(key)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                warn!("Stored value for {} is not a usable number: {:?}", key, raw);
                None
            }
        }
    }

    fn read_date(&self, key: &str) -> Option<NaiveDate> {
        let raw = self.read_key(key)?;
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Stored value for {} is not a date: {:?}", key, raw);
                None
            }
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.repository.get(key) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to read {}: {:#}", key, e);
                None
            }
        }
    }
}
