use serde::{Deserialize, Serialize};

/// Read-only view of the balance state handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Current spendable amount. May be negative; no floor is enforced.
    pub balance: f64,
    /// Amount credited to the balance once per calendar day.
    pub daily_allowance: f64,
    /// True until the initial load has completed.
    pub is_loading: bool,
    /// True once today's allowance state is settled, whether the credit
    /// happened during this load or earlier the same day.
    pub today_allowance_added: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AmountValidationError {
    #[error("Amount must be a finite number")]
    NotFinite,
    #[error("Amount must be positive")]
    NonPositive,
}

/// Validate a user-supplied monetary amount for spend and allowance updates.
///
/// The UI is expected to have validated its input already; this is the
/// second, defensive check.
pub fn validate_amount(amount: f64) -> Result<(), AmountValidationError> {
    if !amount.is_finite() {
        return Err(AmountValidationError::NotFinite);
    }
    if amount <= 0.0 {
        return Err(AmountValidationError::NonPositive);
    }
    Ok(())
}
