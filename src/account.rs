//! Account model and its movement policies.
//!
//! Maintains the invariant: `balance >= 0` after every operation.

use crate::client::Client;
use crate::error::Rejection;
use crate::history::TransactionHistory;
use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// Branch code used when none is given.
pub const DEFAULT_BRANCH: &str = "0001";

/// Identifier of an account, unique within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AccountNumber(pub u32);

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Construction-time ceilings of a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    /// Largest amount accepted in a single withdrawal.
    pub withdrawal_limit: Money,

    /// Number of withdrawals allowed over the account's lifetime.
    pub max_withdrawals: u32,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        CheckingLimits {
            withdrawal_limit: Money::from_cents(500_00),
            max_withdrawals: 3,
        }
    }
}

/// Limits of a checking account plus the withdrawals already spent.
///
/// `withdrawals_made` stays within `0..=limits.max_withdrawals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub limits: CheckingLimits,
    withdrawals_made: u32,
}

impl CheckingPolicy {
    pub fn new(limits: CheckingLimits) -> Self {
        CheckingPolicy {
            limits,
            withdrawals_made: 0,
        }
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }
}

/// Movement policy of an account, chosen when it is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Only the amount and balance checks apply.
    Standard,

    /// Adds a per-withdrawal ceiling and a withdrawal count ceiling.
    Checking(CheckingPolicy),
}

/// A balance-holding account owned by one client.
///
/// # Invariants
///
/// - `balance` is never negative; withdrawals that would overdraw are rejected
/// - every successful movement applied through a [`Transaction`] appends one
///   history entry
///
/// [`Transaction`]: crate::transaction::Transaction
#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    branch: String,
    number: AccountNumber,
    balance: Money,
    history: TransactionHistory,
    kind: AccountKind,
}

impl Account {
    fn with_kind(holder: &str, number: AccountNumber, branch: &str, kind: AccountKind) -> Self {
        Account {
            holder: holder.to_string(),
            branch: branch.to_string(),
            number,
            balance: Money::ZERO,
            history: TransactionHistory::new(),
            kind,
        }
    }

    /// Builds a standard account for the client with national ID `holder`.
    pub fn standard(holder: &str, number: AccountNumber, branch: &str) -> Self {
        Self::with_kind(holder, number, branch, AccountKind::Standard)
    }

    /// Builds a checking account with the given ceilings.
    pub fn checking(
        holder: &str,
        number: AccountNumber,
        branch: &str,
        limits: CheckingLimits,
    ) -> Self {
        Self::with_kind(
            holder,
            number,
            branch,
            AccountKind::Checking(CheckingPolicy::new(limits)),
        )
    }

    /// Opens a standard account on `client` and returns it.
    pub fn create<'a>(client: &'a mut Client, number: AccountNumber, branch: &str) -> &'a mut Self {
        let account = Self::standard(client.national_id(), number, branch);
        client.add_account(account)
    }

    /// Opens a checking account on `client` and returns it.
    pub fn create_checking<'a>(
        client: &'a mut Client,
        number: AccountNumber,
        branch: &str,
        limits: CheckingLimits,
    ) -> &'a mut Self {
        let account = Self::checking(client.national_id(), number, branch, limits);
        client.add_account(account)
    }

    /// National ID of the owning client.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut TransactionHistory {
        &mut self.history
    }

    /// Withdrawals performed so far; always 0 for standard accounts.
    pub fn withdrawals_made(&self) -> u32 {
        match &self.kind {
            AccountKind::Standard => 0,
            AccountKind::Checking(policy) => policy.withdrawals_made,
        }
    }

    /// Credits `amount`. Rejects amounts that are not positive and deposits
    /// that would push the balance past [`Money::max`].
    pub fn deposit(&mut self, amount: Money) -> Result<(), Rejection> {
        if !amount.is_positive() {
            return Err(Rejection::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Rejection::AmountTooLarge)?;
        Ok(())
    }

    /// Debits `amount` under the account's policy.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// - amount not positive
    /// - amount above the balance
    /// - (checking) amount above the per-withdrawal limit
    /// - (checking) withdrawal count already reached
    pub fn withdraw(&mut self, amount: Money) -> Result<(), Rejection> {
        if !amount.is_positive() {
            return Err(Rejection::InvalidAmount);
        }

        if amount > self.balance {
            return Err(Rejection::InsufficientFunds);
        }
        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(Rejection::InsufficientFunds)?;

        if let AccountKind::Checking(policy) = &mut self.kind {
            if amount > policy.limits.withdrawal_limit {
                return Err(Rejection::WithdrawalLimitExceeded {
                    limit: policy.limits.withdrawal_limit,
                });
            }

            if policy.withdrawals_made >= policy.limits.max_withdrawals {
                return Err(Rejection::WithdrawalCountExceeded {
                    max: policy.limits.max_withdrawals,
                });
            }

            policy.withdrawals_made += 1;
        }

        self.balance = remaining;
        Ok(())
    }

    /// Human-readable statement: every recorded movement followed by the
    /// current balance.
    pub fn statement(&self) -> String {
        format!(
            "================ STATEMENT ================\n\
             {}\n\
             \n\
             Balance:\t\t{}\n\
             ===========================================",
            self.history.render(),
            self.balance
        )
    }
}
