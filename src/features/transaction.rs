use super::account::{AccountError, AccountId};
use super::currency::Currency;
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A credit to a single account. Only `to_account_id` is set.
    Deposit,

    /// A debit from a single account. Only `from_account_id` is set.
    /// Fails without touching the balance if funds are insufficient.
    Withdrawal,

    /// Moves funds between two distinct accounts of the same currency.
    /// Both account ids are set.
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    #[error("Currencies must match for transfer: {from} -> {to}")]
    CurrencyMismatch { from: Currency, to: Currency },

    #[error("Cannot transfer within the same account ({0})")]
    SelfTransfer(AccountId),
}

pub type TransactionResult<T> = Result<T, TransactionError>;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `tx-<creation millis in base 36>-<6 random base 36 chars>`
    pub(crate) fn generate(now: DateTime<Utc>) -> Self {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..6)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();

        Self(format!("tx-{}-{}", to_base36(millis), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&digit| digit as char).collect()
}

/// Immutable ledger entry. Accounts are referenced by id only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub(crate) id: TransactionId,

    /// Wall-clock time at which the entry was appended
    pub(crate) ts: DateTime<Utc>,

    pub(crate) kind: TransactionKind,

    /// Always positive
    pub(crate) amount: Decimal,

    /// Currency of the account(s) involved
    pub(crate) currency: Currency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) from_account_id: Option<AccountId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) to_account_id: Option<AccountId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl Transaction {
    pub(crate) fn ensure_positive(amount: Decimal) -> TransactionResult<()> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount(amount));
        }
        Ok(())
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn ts(&self) -> DateTime<Utc> {
        self.ts
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Source account; set for withdrawals and transfers.
    pub fn from_account_id(&self) -> Option<&AccountId> {
        self.from_account_id.as_ref()
    }

    /// Destination account; set for deposits and transfers.
    pub fn to_account_id(&self) -> Option<&AccountId> {
        self.to_account_id.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
