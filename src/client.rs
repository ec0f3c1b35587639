//! Clients and the accounts they own.

use crate::account::{Account, AccountNumber};
use crate::error::Rejection;
use crate::transaction::Transaction;

/// An account holder.
///
/// Identity fields are opaque to the ledger. The client exclusively owns its
/// accounts and is the only party allowed to move money in them.
#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    birth_date: String,
    national_id: String,
    address: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(name: &str, birth_date: &str, national_id: &str, address: &str) -> Self {
        Client {
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            national_id: national_id.to_string(),
            address: address.to_string(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up one of this client's accounts by number.
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Takes ownership of `account` and returns it. Numbers are assumed unique.
    pub fn add_account(&mut self, account: Account) -> &mut Account {
        let idx = self.accounts.len();
        self.accounts.push(account);
        &mut self.accounts[idx]
    }

    /// Applies `transaction` to the owned account `number`.
    ///
    /// Fails with [`Rejection::NotOwned`] without touching anything when the
    /// client has no account with that number.
    pub fn initiate(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), Rejection> {
        let account = self
            .account_mut(number)
            .ok_or(Rejection::NotOwned { number })?;
        transaction.apply(account)
    }
}
