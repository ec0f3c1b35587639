//! Integration tests for the branch-ledger CLI.
//!
//! These tests run the actual binary, feeding menu input on stdin.

use assert_cmd::Command;
use predicates::prelude::*;

const NEW_CLIENT: &str = "nu\n12345678900\nAna Souza\n01-02-1990\nRua A, 1 - Centro - SP/SP\n";

/// Run the binary with the given stdin and return stdout
fn run_ledger(script: &str) -> String {
    let mut cmd = Command::cargo_bin("branch-ledger").unwrap();
    let assert = cmd.write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_menu_is_shown_and_quit_exits() {
    let output = run_ledger("q\n");
    assert!(output.contains("================ MENU ================"));
    assert!(output.contains("[nu]\tNew client"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("branch-ledger").unwrap();
    cmd.write_stdin("").assert().success();
}

#[test]
fn test_full_session() {
    let script = format!(
        "{NEW_CLIENT}nc\n12345678900\nd\n12345678900\n1\n1000\ns\n12345678900\n1\n600\ns\n12345678900\n1\n500\ne\n12345678900\n1\nlc\nq\n"
    );
    let output = run_ledger(&script);

    assert!(output.contains("Client created successfully"));
    assert!(output.contains("Account 1 created successfully"));
    assert!(output.contains("Deposit completed successfully"));
    assert!(output.contains("Operation failed! amount exceeds per-withdrawal limit of 500.00."));
    assert!(output.contains("Withdrawal completed successfully"));
    assert!(output.contains("Deposit: 1000.00"));
    assert!(output.contains("Withdrawal: 500.00"));
    assert!(output.contains("Balance:\t\t500.00"));
    assert!(output.contains("0001,1,Ana Souza,500.00"));
}

#[test]
fn test_withdrawal_count_ceiling() {
    let mut script = format!("{NEW_CLIENT}nc\n12345678900\nd\n12345678900\n1\n100\n");
    for _ in 0..4 {
        script.push_str("s\n12345678900\n1\n10\n");
    }
    script.push_str("q\n");

    let output = run_ledger(&script);
    assert_eq!(output.matches("Withdrawal completed successfully").count(), 3);
    assert!(output.contains("withdrawal count exceeded"));
}

#[test]
fn test_configured_limits() {
    let script = format!(
        "{NEW_CLIENT}nc\n12345678900\nd\n12345678900\n1\n100\ns\n12345678900\n1\n60\nlc\nq\n"
    );
    let mut cmd = Command::cargo_bin("branch-ledger").unwrap();
    cmd.env("BANK_BRANCH", "0042")
        .env("BANK_WITHDRAWAL_LIMIT", "50")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds per-withdrawal limit of 50.00"))
        .stdout(predicate::str::contains("0042,1,Ana Souza,100.00"));
}

#[test]
fn test_invalid_config_error() {
    let mut cmd = Command::cargo_bin("branch-ledger").unwrap();
    cmd.env("BANK_MAX_WITHDRAWALS", "many")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error").and(predicate::str::contains("BANK_MAX_WITHDRAWALS")));
}

#[test]
fn test_malformed_input_is_reported() {
    let script = format!(
        "{NEW_CLIENT}nc\n12345678900\nd\n12345678900\none\nd\n12345678900\n1\nabc\nfoo\nq\n"
    );
    let output = run_ledger(&script);

    assert!(output.contains("Invalid account number"));
    assert!(output.contains("Invalid value"));
    assert!(output.contains("Invalid operation"));
}

#[test]
fn test_oversized_amounts_are_refused_without_crashing() {
    let huge = "d\n12345678900\n1\n79228162514264337593543950335\n";
    let max = "d\n12345678900\n1\n1000000000000000\n";
    let script = format!("{NEW_CLIENT}nc\n12345678900\n{huge}{huge}{max}{max}lc\nq\n");
    let output = run_ledger(&script);

    assert!(output.contains("Invalid value: amount is larger than 1000000000000000.00."));
    assert!(output.contains("Operation failed! amount too large"));
    assert!(output.contains("0001,1,Ana Souza,1000000000000000.00"));
}
