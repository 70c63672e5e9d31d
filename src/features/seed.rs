//! Demo accounts and their May 2024 history.

use super::account::{Account, AccountId};
use super::currency::Currency;
use super::transaction::{Transaction, TransactionId, TransactionKind};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(
            "acc-pln",
            "PLN Current",
            "11 1140 2004 0000 3102 0476 1234",
            Currency::Pln,
            dec!(10_000),
        ),
        Account::new(
            "acc-sav",
            "PLN Savings",
            "11 1140 2004 0000 3102 0476 5678",
            Currency::Pln,
            dec!(25_000),
        ),
        Account::new(
            "acc-eur",
            "EUR Account",
            "DE89 3704 0044 0532 0130 00",
            Currency::Eur,
            dec!(2_000),
        ),
    ]
}

/// Listed oldest first; the store reorders them.
pub fn transactions() -> Vec<Transaction> {
    vec![
        historical(
            "tx-001",
            (5, 1, 9, 30),
            TransactionKind::Deposit,
            dec!(2_500),
            Currency::Pln,
            (None, Some("acc-pln")),
            "Salary May",
        ),
        historical(
            "tx-002",
            (5, 3, 12, 15),
            TransactionKind::Withdrawal,
            dec!(300),
            Currency::Pln,
            (Some("acc-pln"), None),
            "ATM cash",
        ),
        historical(
            "tx-003",
            (5, 7, 17, 45),
            TransactionKind::Transfer,
            dec!(1_200),
            Currency::Pln,
            (Some("acc-pln"), Some("acc-sav")),
            "Monthly savings",
        ),
        historical(
            "tx-004",
            (5, 10, 8, 5),
            TransactionKind::Deposit,
            dec!(1_000),
            Currency::Eur,
            (None, Some("acc-eur")),
            "Invoice payment",
        ),
        historical(
            "tx-005",
            (5, 12, 10, 0),
            TransactionKind::Transfer,
            dec!(500),
            Currency::Pln,
            (Some("acc-sav"), Some("acc-pln")),
            "Cover card bill",
        ),
    ]
}

fn historical(
    id: &str,
    (month, day, hour, minute): (u32, u32, u32, u32),
    kind: TransactionKind,
    amount: Decimal,
    currency: Currency,
    (from, to): (Option<&str>, Option<&str>),
    description: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        ts: in_2024(month, day, hour, minute),
        kind,
        amount,
        currency,
        from_account_id: from.map(AccountId::new),
        to_account_id: to.map(AccountId::new),
        description: Some(description.to_string()),
    }
}

fn in_2024(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
