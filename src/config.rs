//! Runtime configuration read from environment variables.

use crate::account::{CheckingLimits, DEFAULT_BRANCH};
use crate::error::{BankError, Result};
use crate::money::Money;
use std::env;
use std::str::FromStr;

/// Branch code given to new accounts.
pub const BRANCH_VAR: &str = "BANK_BRANCH";

/// Per-withdrawal ceiling of new checking accounts.
pub const WITHDRAWAL_LIMIT_VAR: &str = "BANK_WITHDRAWAL_LIMIT";

/// Withdrawal count ceiling of new checking accounts.
pub const MAX_WITHDRAWALS_VAR: &str = "BANK_MAX_WITHDRAWALS";

/// Settings applied when the registry opens accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub branch: String,
    pub checking_limits: CheckingLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            branch: DEFAULT_BRANCH.to_string(),
            checking_limits: CheckingLimits::default(),
        }
    }
}

impl BankConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BankConfig::default();

        if let Some(branch) = lookup(BRANCH_VAR) {
            let branch = branch.trim();
            if branch.is_empty() {
                return Err(invalid(BRANCH_VAR, "branch code must not be empty"));
            }
            config.branch = branch.to_string();
        }

        if let Some(raw) = lookup(WITHDRAWAL_LIMIT_VAR) {
            let limit = Money::from_str(&raw).map_err(|e| invalid(WITHDRAWAL_LIMIT_VAR, e))?;
            if !limit.is_positive() {
                return Err(invalid(WITHDRAWAL_LIMIT_VAR, "limit must be positive"));
            }
            config.checking_limits.withdrawal_limit = limit;
        }

        if let Some(raw) = lookup(MAX_WITHDRAWALS_VAR) {
            config.checking_limits.max_withdrawals = raw
                .trim()
                .parse()
                .map_err(|e| invalid(MAX_WITHDRAWALS_VAR, e))?;
        }

        Ok(config)
    }
}

fn invalid(key: &str, message: impl ToString) -> BankError {
    BankError::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}
