//! Interactive menu loop
//!
//! Malformed input is re-prompted here; the core only ever sees parsed
//! values. Anomaly signals ride along on receipts and are rendered as
//! `[AML WARNING] ...` lines.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use corebank_bank::{Bank, Receipt};
use corebank_ledger::AccountNumber;
use rust_decimal::Decimal;

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

pub fn run(bank: &mut Bank) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("===== Corebank =====");
        println!("1. Open account");
        println!("2. Access account");
        println!("3. List accounts");
        println!("0. Exit");

        let Some(choice) = read_line(&mut lines, "> ")? else {
            break;
        };
        match choice.as_str() {
            "1" => open_account(bank, &mut lines)?,
            "2" => session(bank, &mut lines)?,
            "3" => list_accounts(bank),
            "0" | "q" => break,
            "" => continue,
            other => println!("Unknown option: {other}"),
        }
    }
    println!("Goodbye.");
    Ok(())
}

fn open_account(bank: &mut Bank, lines: &mut Lines<'_>) -> anyhow::Result<()> {
    let Some(name) = read_line(lines, "Holder name: ")? else {
        return Ok(());
    };
    let Some(age) = read_value::<u32>(lines, "Age: ")? else {
        return Ok(());
    };
    let Some(salary) = read_value::<Decimal>(lines, "Declared salary: ")? else {
        return Ok(());
    };
    let Some(pin) = read_value::<i64>(lines, "PIN: ")? else {
        return Ok(());
    };
    let Some(initial) = read_value::<Decimal>(lines, "Initial balance: ")? else {
        return Ok(());
    };

    match bank.open_account(name, age, salary, pin, initial) {
        Ok(number) => println!("Account opened. Your account number is {number}."),
        Err(e) => println!("Account refused: {e}"),
    }
    Ok(())
}

fn session(bank: &mut Bank, lines: &mut Lines<'_>) -> anyhow::Result<()> {
    let Some(number) = read_value::<u32>(lines, "Account number: ")? else {
        return Ok(());
    };
    let number = AccountNumber(number);
    let Some(pin) = read_value::<i64>(lines, "PIN: ")? else {
        return Ok(());
    };

    // Uniform non-answer on unknown number or wrong PIN
    let Some(account) = bank.authenticate(number, pin) else {
        println!("Authentication failed.");
        return Ok(());
    };
    println!("Welcome, {}.", account.name());

    loop {
        println!();
        println!("--- Account {number} ---");
        println!("1. Deposit");
        println!("2. Withdraw");
        println!("3. Balance");
        println!("4. Statement");
        println!("0. Log out");

        let Some(choice) = read_line(lines, "> ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(amount) = read_value::<Decimal>(lines, "Amount: ")? else {
                    return Ok(());
                };
                match bank.deposit(number, amount) {
                    Ok(receipt) => print_receipt(&receipt),
                    Err(e) => println!("Deposit refused: {e}"),
                }
            }
            "2" => {
                let Some(amount) = read_value::<Decimal>(lines, "Amount: ")? else {
                    return Ok(());
                };
                match bank.withdraw(number, amount) {
                    Ok(receipt) => print_receipt(&receipt),
                    Err(e) => println!("Withdrawal refused: {e}"),
                }
            }
            "3" => match bank.balance(number) {
                Ok(receipt) => print_receipt(&receipt),
                Err(e) => println!("Error: {e}"),
            },
            "4" => match bank.statement(number) {
                Ok(statement) if statement.is_empty() => println!("No transactions yet."),
                Ok(statement) => {
                    for tx in statement {
                        println!("{tx}");
                    }
                }
                Err(e) => println!("Error: {e}"),
            },
            "0" => return Ok(()),
            "" => continue,
            other => println!("Unknown option: {other}"),
        }
    }
}

fn list_accounts(bank: &Bank) {
    let summaries = bank.list_accounts();
    if summaries.is_empty() {
        println!("No accounts.");
        return;
    }
    for summary in summaries {
        println!(
            "{} | {} | age {} | balance {} | {} transaction(s)",
            summary.number, summary.name, summary.age, summary.balance, summary.transaction_count
        );
    }
}

fn print_receipt(receipt: &Receipt) {
    println!("Balance: {}", receipt.balance);
    for alert in &receipt.alerts {
        println!("[AML WARNING] {alert}");
    }
}

/// Read one trimmed line; None means stdin is closed
fn read_line(lines: &mut Lines<'_>, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Read and parse a value, re-prompting on malformed input
fn read_value<T: FromStr>(lines: &mut Lines<'_>, prompt: &str) -> anyhow::Result<Option<T>> {
    loop {
        let Some(line) = read_line(lines, prompt)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input, try again."),
        }
    }
}
