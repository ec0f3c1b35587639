//! Registry of clients and their accounts.
//!
//! Owns the session's state: every client (each owning its accounts) and the
//! account-number sequence. It is created by the caller and passed around
//! explicitly rather than kept as global state.

use crate::account::{Account, AccountNumber};
use crate::client::Client;
use crate::config::BankConfig;
use crate::error::{BankError, Result};
use crate::money::Money;
use log::{debug, info};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// One line of the account listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Money,
}

/// Client and account store.
///
/// # Numbering
///
/// Account numbers start at 1 and grow by one each time an account is
/// actually opened. Numbers are never reused; once `u32::MAX` has been
/// handed out no further accounts can be opened.
pub struct Registry {
    config: BankConfig,

    /// Clients in registration order.
    clients: Vec<Client>,

    /// Client position in `clients` indexed by national ID.
    by_national_id: HashMap<String, usize>,

    /// Owner position in `clients` indexed by account number.
    by_account: HashMap<AccountNumber, usize>,

    /// `None` once the sequence is exhausted.
    next_number: Option<u32>,
}

impl Registry {
    /// Creates an empty registry that opens accounts with `config`.
    pub fn new(config: BankConfig) -> Self {
        Registry {
            config,
            clients: Vec::new(),
            by_national_id: HashMap::new(),
            by_account: HashMap::new(),
            next_number: Some(1),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Adds a client. National IDs must be unique, and so must the numbers
    /// of any accounts the client already holds.
    pub fn register_client(&mut self, client: Client) -> Result<&mut Client> {
        if self.by_national_id.contains_key(client.national_id()) {
            return Err(BankError::DuplicateClient {
                national_id: client.national_id().to_string(),
            });
        }

        let mut incoming = HashSet::new();
        for account in client.accounts() {
            let number = account.number();
            if self.by_account.contains_key(&number) || !incoming.insert(number) {
                return Err(BankError::DuplicateAccount { number });
            }
        }

        let idx = self.clients.len();
        info!("Registered client {}", client.national_id());
        self.by_national_id
            .insert(client.national_id().to_string(), idx);
        for account in client.accounts() {
            self.by_account.insert(account.number(), idx);
            self.reserve_number(account.number());
        }
        self.clients.push(client);

        Ok(&mut self.clients[idx])
    }

    pub fn find_client(&self, national_id: &str) -> Option<&Client> {
        self.by_national_id
            .get(national_id)
            .map(|&idx| &self.clients[idx])
    }

    pub fn find_client_mut(&mut self, national_id: &str) -> Option<&mut Client> {
        match self.by_national_id.get(national_id) {
            Some(&idx) => Some(&mut self.clients[idx]),
            None => None,
        }
    }

    /// Looks up any account by number.
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        let &idx = self.by_account.get(&number)?;
        self.clients[idx].account(number)
    }

    /// Opens a checking account with the configured branch and limits.
    pub fn open_checking_account(&mut self, national_id: &str) -> Result<&mut Account> {
        let limits = self.config.checking_limits;
        self.open_account(national_id, |client, number, branch| {
            Account::create_checking(client, number, branch, limits)
        })
    }

    /// Opens a standard account with the configured branch.
    pub fn open_standard_account(&mut self, national_id: &str) -> Result<&mut Account> {
        self.open_account(national_id, Account::create)
    }

    fn open_account<F>(&mut self, national_id: &str, create: F) -> Result<&mut Account>
    where
        F: for<'a> FnOnce(&'a mut Client, AccountNumber, &str) -> &'a mut Account,
    {
        let idx = match self.by_national_id.get(national_id) {
            Some(&idx) => idx,
            None => {
                return Err(BankError::UnknownClient {
                    national_id: national_id.to_string(),
                })
            }
        };

        let number = AccountNumber(self.next_number.ok_or(BankError::AccountNumbersExhausted)?);
        self.next_number = number.0.checked_add(1);
        self.by_account.insert(number, idx);

        debug!(
            "Opening account {} at branch {} for client {}",
            number, self.config.branch, national_id
        );
        Ok(create(&mut self.clients[idx], number, &self.config.branch))
    }

    fn reserve_number(&mut self, number: AccountNumber) {
        if let Some(next) = self.next_number {
            if number.0 >= next {
                self.next_number = number.0.checked_add(1);
            }
        }
    }

    /// All accounts ordered by number, with the holder's name.
    pub fn accounts(&self) -> Vec<AccountSummary> {
        let mut summaries: Vec<_> = self
            .clients
            .iter()
            .flat_map(|client| {
                client.accounts().iter().map(move |account| AccountSummary {
                    branch: account.branch().to_string(),
                    number: account.number(),
                    holder: client.name().to_string(),
                    balance: account.balance(),
                })
            })
            .collect();
        summaries.sort_by_key(|s| s.number);
        summaries
    }

    /// Writes the account listing as CSV, ordered by account number.
    pub fn write_accounts<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for summary in self.accounts() {
            csv_writer.serialize(summary)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}
