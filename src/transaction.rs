//! Deposit and withdrawal requests.

use crate::account::Account;
use crate::error::Rejection;
use crate::money::Money;

/// A one-shot request to move money into or out of an account.
///
/// Built per user action, applied once, then dropped. Only its summary
/// survives, in the account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit funds to the account.
    Deposit(Money),

    /// Debit funds from the account, subject to its withdrawal policy.
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// History line written when the transaction is applied.
    pub fn description(&self) -> String {
        match self {
            Transaction::Deposit(amount) => format!("Deposit: {}", amount),
            Transaction::Withdrawal(amount) => format!("Withdrawal: {}", amount),
        }
    }

    /// Applies the movement to `account`.
    ///
    /// Amount validation is left to the account. A history entry is written
    /// only when the account accepts the movement.
    pub fn apply(&self, account: &mut Account) -> Result<(), Rejection> {
        match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        }

        account.history_mut().record(self.description());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountNumber, CheckingLimits};
    use std::str::FromStr;

    fn dec(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn checking() -> Account {
        Account::checking("123", AccountNumber(1), "0001", CheckingLimits::default())
    }

    #[test]
    fn test_description_uses_two_decimals() {
        assert_eq!(Transaction::Deposit(dec("100")).description(), "Deposit: 100.00");
        assert_eq!(
            Transaction::Withdrawal(dec("2.5")).description(),
            "Withdrawal: 2.50"
        );
    }

    #[test]
    fn test_successful_deposit_records_history() {
        let mut account = checking();
        assert!(Transaction::Deposit(dec("100.00")).apply(&mut account).is_ok());

        assert_eq!(account.balance(), dec("100.00"));
        assert_eq!(account.history().len(), 1);
        assert!(account.history().render().contains("Deposit: 100.00"));
    }

    #[test]
    fn test_rejected_deposit_records_nothing() {
        let mut account = checking();
        let result = Transaction::Deposit(dec("0")).apply(&mut account);

        assert_eq!(result, Err(Rejection::InvalidAmount));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_withdrawal_records_history() {
        let mut account = checking();
        Transaction::Deposit(dec("50")).apply(&mut account).unwrap();
        Transaction::Withdrawal(dec("20")).apply(&mut account).unwrap();

        assert_eq!(account.balance(), dec("30.00"));
        assert_eq!(account.history().len(), 2);
        assert!(account.history().entries()[1]
            .description
            .contains("Withdrawal: 20.00"));
    }

    #[test]
    fn test_rejected_withdrawal_records_nothing() {
        let mut account = checking();
        Transaction::Deposit(dec("50")).apply(&mut account).unwrap();

        let result = Transaction::Withdrawal(dec("80")).apply(&mut account);
        assert_eq!(result, Err(Rejection::InsufficientFunds));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.balance(), dec("50.00"));
    }
}
