//! # Branch Ledger
//!
//! A minimal banking ledger: clients own accounts, accounts accept deposits
//! and withdrawals under policy constraints, and every applied movement is
//! recorded in an append-only history.
//!
//! ## Design Principles
//!
//! - **Cent precision**: Amounts use 2 decimal places via `rust_decimal`
//! - **Rejections are values**: Policy violations come back as [`Rejection`],
//!   never as panics
//! - **Strict invariants**: balances never go negative
//! - **Explicit state**: the [`Registry`] is owned by the caller and passed
//!   in, there is no global session state
//!
//! ## Example
//!
//! ```
//! use branch_ledger::{Account, AccountNumber, Client, Money, Rejection, Transaction};
//! use std::str::FromStr;
//!
//! let mut client = Client::new("Ana Souza", "01-02-1990", "111", "Rua A, 1");
//! Account::create(&mut client, AccountNumber(1), "0001");
//!
//! let deposit = Transaction::Deposit(Money::from_str("100").unwrap());
//! client.initiate(AccountNumber(1), &deposit).unwrap();
//!
//! let too_much = Transaction::Withdrawal(Money::from_str("150").unwrap());
//! assert_eq!(
//!     client.initiate(AccountNumber(1), &too_much),
//!     Err(Rejection::InsufficientFunds)
//! );
//! assert_eq!(client.account(AccountNumber(1)).unwrap().balance().to_string(), "100.00");
//! ```

pub mod account;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod money;
pub mod registry;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountKind, AccountNumber, CheckingLimits, CheckingPolicy};
pub use client::Client;
pub use config::BankConfig;
pub use error::{BankError, Rejection, Result};
pub use history::{HistoryEntry, TransactionHistory};
pub use money::{Money, MoneyError};
pub use registry::{AccountSummary, Registry};
pub use session::{Command, Session};
pub use transaction::Transaction;
