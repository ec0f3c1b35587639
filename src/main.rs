//! Branch Ledger CLI
//!
//! Interactive menu over an in-memory ledger. Commands are read from stdin,
//! one per line; prompts and results go to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity
//! - `BANK_BRANCH`: Branch code of new accounts (default `0001`)
//! - `BANK_WITHDRAWAL_LIMIT`: Per-withdrawal ceiling of new checking accounts (default `500.00`)
//! - `BANK_MAX_WITHDRAWALS`: Withdrawal count ceiling of new checking accounts (default `3`)

use branch_ledger::{BankConfig, Result, Session};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = BankConfig::from_env()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session.run()
}
