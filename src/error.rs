//! Error and rejection types for the ledger.

use crate::account::AccountNumber;
use crate::money::Money;
use thiserror::Error;

/// Result type alias for registry, session and configuration operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Why a requested movement was refused.
///
/// Rejections are expected outcomes of user requests, not faults. The
/// request is terminal: nothing was changed and the caller has to issue a
/// new one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Amount is zero or negative
    #[error("invalid amount")]
    InvalidAmount,

    /// The resulting balance would exceed the largest representable amount
    #[error("amount too large: balance would exceed {}", Money::max())]
    AmountTooLarge,

    /// Amount is larger than the current balance
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Amount is larger than the checking account's single-withdrawal ceiling
    #[error("amount exceeds per-withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { limit: Money },

    /// The checking account already used all of its withdrawals
    #[error("withdrawal count exceeded (maximum {max})")]
    WithdrawalCountExceeded { max: u32 },

    /// The account is not one of the initiating client's accounts
    #[error("account does not belong to client (account {number})")]
    NotOwned { number: AccountNumber },
}

/// Errors that can occur outside the policy checks.
#[derive(Error, Debug)]
pub enum BankError {
    /// Failed to read input or write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A client with this national ID is already registered
    #[error("a client with national ID {national_id} already exists")]
    DuplicateClient { national_id: String },

    /// An account number is already taken
    #[error("account number {number} is already in use")]
    DuplicateAccount { number: AccountNumber },

    /// Every account number has been handed out
    #[error("no account numbers left")]
    AccountNumbersExhausted,

    /// No client is registered under this national ID
    #[error("no client with national ID {national_id}")]
    UnknownClient { national_id: String },

    /// A configuration variable could not be parsed
    #[error("invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },
}
