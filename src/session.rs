//! Interactive menu driving the registry.
//!
//! Reads one command per line from any `BufRead` and writes prompts and
//! results to any `Write`, so the same loop serves stdin/stdout and tests.
//! Malformed numbers are caught here and never reach the accounts.

use crate::account::AccountNumber;
use crate::client::Client;
use crate::config::BankConfig;
use crate::error::{BankError, Result};
use crate::money::Money;
use crate::registry::Registry;
use crate::transaction::Transaction;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" => Ok(Command::Deposit),
            "s" => Ok(Command::Withdraw),
            "e" => Ok(Command::Statement),
            "nc" => Ok(Command::NewAccount),
            "lc" => Ok(Command::ListAccounts),
            "nu" => Ok(Command::NewClient),
            "q" => Ok(Command::Quit),
            _ => Err(()),
        }
    }
}

/// Menu loop over a registry.
pub struct Session<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with an empty registry.
    pub fn new(config: BankConfig, input: R, output: W) -> Self {
        Self::with_registry(Registry::new(config), input, output)
    }

    pub fn with_registry(registry: Registry, input: R, output: W) -> Self {
        Session {
            registry,
            input,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the session, handing back the registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Runs until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                break;
            };

            match Command::from_str(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(()) => {
                    warn!("Unknown menu option {:?}", line);
                    writeln!(
                        self.output,
                        "Invalid operation, please select the desired operation again."
                    )?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Runs a single non-quit command.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Deposit => self.transact(Transaction::Deposit, "deposit"),
            Command::Withdraw => self.transact(Transaction::Withdrawal, "withdrawal"),
            Command::Statement => self.statement(),
            Command::NewAccount => self.new_account(),
            Command::ListAccounts => self.list_accounts(),
            Command::NewClient => self.new_client(),
            Command::Quit => Ok(()),
        }
    }

    /// Writes `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn failed(&mut self, reason: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "\n@@@ Operation failed! {}. @@@", reason)?;
        Ok(())
    }

    /// Asks for the holder's national ID and one of their account numbers.
    fn select_account(&mut self) -> Result<Option<(String, AccountNumber)>> {
        let Some(national_id) = self.prompt("Holder's national ID: ")? else {
            return Ok(None);
        };

        let Some(client) = self.registry.find_client(&national_id) else {
            writeln!(self.output, "\n@@@ Client not found. @@@")?;
            return Ok(None);
        };

        if client.accounts().is_empty() {
            writeln!(self.output, "\n@@@ Client has no accounts. @@@")?;
            return Ok(None);
        }

        writeln!(self.output, "\nClient accounts:")?;
        for account in client.accounts() {
            writeln!(
                self.output,
                "- Number: {} | Branch: {} | Balance: {}",
                account.number(),
                account.branch(),
                account.balance()
            )?;
        }

        let Some(raw) = self.prompt("Account number: ")? else {
            return Ok(None);
        };
        let number = match raw.parse::<u32>() {
            Ok(n) => AccountNumber(n),
            Err(_) => {
                warn!("Malformed account number {:?}", raw);
                writeln!(self.output, "\n@@@ Invalid account number. @@@")?;
                return Ok(None);
            }
        };

        let owns = self
            .registry
            .find_client(&national_id)
            .and_then(|client| client.account(number))
            .is_some();
        if !owns {
            writeln!(
                self.output,
                "\n@@@ Account not found among the client's accounts. @@@"
            )?;
            return Ok(None);
        }

        Ok(Some((national_id, number)))
    }

    fn transact(&mut self, make: fn(Money) -> Transaction, label: &str) -> Result<()> {
        let Some((national_id, number)) = self.select_account()? else {
            return Ok(());
        };

        let Some(raw) = self.prompt(&format!("Amount of the {}: ", label))? else {
            return Ok(());
        };
        let amount = match Money::from_str(&raw) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Malformed amount {:?}: {}", raw, e);
                writeln!(self.output, "\n@@@ Invalid value: {}. @@@", e)?;
                return Ok(());
            }
        };

        let transaction = make(amount);
        let outcome = match self.registry.find_client_mut(&national_id) {
            Some(client) => client.initiate(number, &transaction),
            None => {
                return Err(BankError::UnknownClient { national_id });
            }
        };

        match outcome {
            Ok(()) => {
                writeln!(self.output, "\n=== {} completed successfully! ===", capitalize(label))?;
                Ok(())
            }
            Err(rejection) => {
                debug!(
                    "Rejected {} of {} on account {}: {}",
                    label, amount, number, rejection
                );
                self.failed(rejection)
            }
        }
    }

    fn statement(&mut self) -> Result<()> {
        let Some((national_id, number)) = self.select_account()? else {
            return Ok(());
        };

        let statement = self
            .registry
            .find_client(&national_id)
            .and_then(|client| client.account(number))
            .map(|account| account.statement());

        if let Some(statement) = statement {
            writeln!(self.output, "\n{}", statement)?;
        }
        Ok(())
    }

    fn new_client(&mut self) -> Result<()> {
        let Some(national_id) = self.prompt("National ID (numbers only): ")? else {
            return Ok(());
        };
        if self.registry.find_client(&national_id).is_some() {
            writeln!(self.output, "\n@@@ A client with this national ID already exists! @@@")?;
            return Ok(());
        }

        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, nr - district - city/state): ")? else {
            return Ok(());
        };

        let client = Client::new(&name, &birth_date, &national_id, &address);
        match self.registry.register_client(client) {
            Ok(_) => writeln!(self.output, "=== Client created successfully! ===")?,
            Err(BankError::DuplicateClient { .. }) => {
                writeln!(self.output, "\n@@@ A client with this national ID already exists! @@@")?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn new_account(&mut self) -> Result<()> {
        let Some(national_id) = self.prompt("Client's national ID: ")? else {
            return Ok(());
        };

        match self.registry.open_checking_account(&national_id) {
            Ok(account) => {
                let number = account.number();
                writeln!(self.output, "\n=== Account {} created successfully! ===", number)?;
            }
            Err(BankError::UnknownClient { .. }) => {
                writeln!(
                    self.output,
                    "\n@@@ Client not found, account creation aborted! @@@"
                )?;
            }
            Err(BankError::AccountNumbersExhausted) => {
                writeln!(
                    self.output,
                    "\n@@@ No account numbers left, account creation aborted! @@@"
                )?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        if self.registry.accounts().is_empty() {
            writeln!(self.output, "\n@@@ No accounts registered. @@@")?;
            return Ok(());
        }

        writeln!(self.output)?;
        self.registry.write_accounts(&mut self.output)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
