use account_fin::{
    AccountError, AccountId, Currency, Store, TransactionError, TransactionKind,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

fn id(value: &str) -> AccountId {
    AccountId::new(value)
}

fn balance(store: &Store, account: &str) -> Decimal {
    store.get_account(&id(account)).unwrap().balance()
}

#[test]
fn seed_pln_total() {
    let store = Store::seeded();
    assert_eq!(balance(&store, "acc-pln"), dec!(10000));
    assert_eq!(balance(&store, "acc-sav"), dec!(25000));
    assert_eq!(store.total_balance(Currency::Pln), dec!(35000));
}

#[test]
fn deposit_then_withdraw_restores_balance() {
    let mut store = Store::seeded();
    let before = store.total_transactions();

    store.deposit(&id("acc-pln"), dec!(123.45), None).unwrap();
    store.withdraw(&id("acc-pln"), dec!(123.45), None).unwrap();

    assert_eq!(balance(&store, "acc-pln"), dec!(10000));
    assert_eq!(store.total_transactions(), before + 2);
}

#[test_case("acc-pln", "acc-sav", dec!(100) ; "current to savings")]
#[test_case("acc-sav", "acc-pln", dec!(25000) ; "whole savings balance")]
#[test_case("acc-pln", "acc-sav", dec!(0.01) ; "one grosz")]
fn transfer_conserves_currency_total(from: &str, to: &str, amount: Decimal) {
    let mut store = Store::seeded();
    let (from_before, to_before) = (balance(&store, from), balance(&store, to));

    store.transfer(&id(from), &id(to), amount, None).unwrap();

    assert_eq!(balance(&store, from), from_before - amount);
    assert_eq!(balance(&store, to), to_before + amount);
    assert_eq!(store.total_balance(Currency::Pln), dec!(35000));
}

#[test]
fn deposit_to_missing_account() {
    let mut store = Store::seeded();
    let err = store.deposit(&id("missing-id"), dec!(10), None).unwrap_err();

    assert_eq!(
        err,
        TransactionError::Account(AccountError::NotFound(id("missing-id")))
    );
    assert_eq!(store.total_transactions(), 5);
}

#[test]
fn withdraw_more_than_balance() {
    let mut store = Store::seeded();
    let err = store.withdraw(&id("acc-pln"), dec!(999999), None).unwrap_err();

    assert!(matches!(
        err,
        TransactionError::Account(AccountError::InsufficientFunds { .. })
    ));
    assert_eq!(balance(&store, "acc-pln"), dec!(10000));
}

#[test]
fn transfer_across_currencies() {
    let mut store = Store::seeded();
    let err = store
        .transfer(&id("acc-pln"), &id("acc-eur"), dec!(50), None)
        .unwrap_err();

    assert!(matches!(err, TransactionError::CurrencyMismatch { .. }));
    assert_eq!(balance(&store, "acc-pln"), dec!(10000));
    assert_eq!(balance(&store, "acc-eur"), dec!(2000));
}

#[test]
fn transfer_to_self() {
    let mut store = Store::seeded();
    let err = store
        .transfer(&id("acc-pln"), &id("acc-pln"), dec!(50), None)
        .unwrap_err();

    assert_eq!(err, TransactionError::SelfTransfer(id("acc-pln")));
}

#[test]
fn each_success_prepends_one_transaction() {
    let mut store = Store::seeded();

    let steps: [(TransactionKind, fn(&mut Store) -> bool); 3] = [
        (TransactionKind::Deposit, |s| {
            s.deposit(&id("acc-eur"), dec!(5), Some("a")).is_ok()
        }),
        (TransactionKind::Withdrawal, |s| {
            s.withdraw(&id("acc-sav"), dec!(5), Some("b")).is_ok()
        }),
        (TransactionKind::Transfer, |s| {
            s.transfer(&id("acc-sav"), &id("acc-pln"), dec!(5), Some("c")).is_ok()
        }),
    ];

    for (kind, step) in steps {
        let before = store.total_transactions();
        assert!(step(&mut store));
        assert_eq!(store.total_transactions(), before + 1);
        assert_eq!(store.transactions().next().unwrap().kind(), kind);
    }
}

#[test]
fn balances_never_go_negative() {
    let mut store = Store::seeded();
    let amounts = [dec!(4000), dec!(4000), dec!(4000), dec!(1999.99), dec!(0.02)];

    let (mut succeeded, mut failed) = (0, 0);
    for amount in amounts {
        let outcomes = [
            store.withdraw(&id("acc-pln"), amount, None).is_ok(),
            store
                .transfer(&id("acc-sav"), &id("acc-pln"), amount * dec!(3), None)
                .is_ok(),
            store.withdraw(&id("acc-eur"), amount / dec!(4), None).is_ok(),
        ];
        succeeded += outcomes.iter().filter(|ok| **ok).count();
        failed += outcomes.iter().filter(|ok| !**ok).count();

        for account in store.accounts() {
            assert!(account.balance() >= Decimal::ZERO, "{} went negative", account.id());
        }
    }

    assert!(succeeded > 0);
    assert!(failed > 0);
}

#[test]
fn transaction_ids_are_unique() {
    let mut store = Store::seeded();
    for _ in 0..200 {
        store.deposit(&id("acc-pln"), dec!(1), None).unwrap();
    }

    let mut ids: Vec<_> = store.transactions().map(|tx| tx.id().clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 205);
}
