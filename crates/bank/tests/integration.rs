//! End-to-end session against a fresh bank

use corebank_aml::{AmlConfig, AmlDetector, AmlRule};
use corebank_bank::{Bank, BankError};
use corebank_ledger::{AccountNumber, TxKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn full_customer_session() {
    let mut bank = Bank::default();

    // Open Alice's account
    let number = bank
        .open_account("Alice", 30, dec!(20000), 1234, dec!(0))
        .unwrap();
    assert_eq!(number, AccountNumber(1001));

    // Correct PIN authenticates, wrong PIN does not
    let account = bank.authenticate(number, 1234).unwrap();
    assert_eq!(account.name(), "Alice");
    assert!(bank.authenticate(number, 9999).is_none());

    // Large deposit applies and raises an advisory signal
    let receipt = bank.deposit(number, dec!(60000)).unwrap();
    assert_eq!(receipt.balance, dec!(60000));
    assert!(receipt
        .alerts
        .iter()
        .any(|alert| alert.rule == AmlRule::LargeDeposit));

    // Overdraft is refused and changes nothing
    let refused = bank.withdraw(number, dec!(100000));
    assert!(matches!(refused, Err(BankError::Ledger(_))));
    assert_eq!(bank.balance(number).unwrap().balance, dec!(60000));

    // Withdrawing the full balance succeeds
    let receipt = bank.withdraw(number, dec!(60000)).unwrap();
    assert_eq!(receipt.balance, dec!(0));

    // The statement holds exactly the applied operations, in order
    let statement = bank.statement(number).unwrap();
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[0].kind(), TxKind::Deposit);
    assert_eq!(statement[1].kind(), TxKind::Withdraw);
}

#[test]
fn balance_matches_applied_history_across_mixed_sequence() {
    let mut bank = Bank::default();
    let number = bank
        .open_account("Bob", 45, dec!(30000), 4321, dec!(250))
        .unwrap();

    let deposits = [dec!(1000), dec!(42.42), dec!(60000), dec!(0.01)];
    let withdrawals = [dec!(500), dec!(999999), dec!(42.42), dec!(0.01)];

    for amount in deposits {
        bank.deposit(number, amount).unwrap();
    }
    let mut applied = Decimal::ZERO;
    for amount in withdrawals {
        if bank.withdraw(number, amount).is_ok() {
            applied += amount;
        }
    }

    let total_deposited: Decimal = deposits.iter().sum();
    assert_eq!(
        bank.balance(number).unwrap().balance,
        dec!(250) + total_deposited - applied
    );

    // The refused withdrawal never reached the history
    let statement = bank.statement(number).unwrap();
    assert_eq!(statement.len(), deposits.len() + 3);
}

#[test]
fn detector_thresholds_come_from_injected_config() {
    let config = AmlConfig {
        large_deposit_threshold: dec!(1000),
        ghost_balance_threshold: dec!(2000),
        ..AmlConfig::default()
    };
    let mut bank = Bank::new(AmlDetector::new(config));
    let number = bank
        .open_account("Carol", 28, dec!(15000), 2468, dec!(0))
        .unwrap();

    assert!(bank.deposit(number, dec!(1000)).unwrap().alerts.is_empty());
    let receipt = bank.deposit(number, dec!(1000.01)).unwrap();
    assert!(receipt
        .alerts
        .iter()
        .any(|alert| alert.rule == AmlRule::LargeDeposit));
}

#[test]
fn accounts_are_isolated() {
    let mut bank = Bank::default();
    let alice = bank
        .open_account("Alice", 30, dec!(20000), 1234, dec!(0))
        .unwrap();
    let bob = bank
        .open_account("Bob", 45, dec!(30000), 4321, dec!(0))
        .unwrap();

    bank.deposit(alice, dec!(100)).unwrap();

    assert_eq!(bank.balance(alice).unwrap().balance, dec!(100));
    assert_eq!(bank.balance(bob).unwrap().balance, dec!(0));
    assert!(bank.statement(bob).unwrap().is_empty());

    // Bob's PIN does not open Alice's account
    assert!(bank.authenticate(alice, 4321).is_none());
}
