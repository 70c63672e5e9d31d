use super::currency::Currency;
use super::store::Store;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account {0} not found")]
    NotFound(AccountId),

    #[error(
        "Insufficient funds on account {account}: requested {requested}, but only {available} is available"
    )]
    InsufficientFunds {
        account: AccountId,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Crediting {amount} to account {account} would overflow its balance")]
    BalanceOverflow { account: AccountId, amount: Decimal },
}

pub(crate) type AccountResult<T> = Result<T, AccountError>;

/// Bank account held by the store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,

    /// Display-only account number (IBAN or local format)
    number: String,

    /// Fixed at creation; no operation changes it
    currency: Currency,

    /// Never negative once an operation on it has succeeded
    balance: Decimal,
}

impl Account {
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        number: impl Into<String>,
        currency: Currency,
        balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
            currency,
            balance,
        }
    }

    pub fn find_by_id<'a>(id: &AccountId, store: &'a Store) -> Option<&'a Account> {
        store.accounts.iter().find(|account| &account.id == id)
    }

    /// Index of the account in the store, stable for the store's lifetime.
    pub(crate) fn position(id: &AccountId, store: &Store) -> AccountResult<usize> {
        store
            .accounts
            .iter()
            .position(|account| &account.id == id)
            .ok_or_else(|| AccountError::NotFound(id.clone()))
    }

    /// Balance check only; the caller commits the result with [`Account::update`].
    pub(crate) fn ensure_funds(&self, amount: Decimal) -> AccountResult<()> {
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                account: self.id.clone(),
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    pub(crate) fn credit(&self, amount: Decimal) -> AccountResult<Self> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::BalanceOverflow {
                account: self.id.clone(),
                amount,
            })?;

        Ok(Self {
            balance,
            ..self.clone()
        })
    }

    pub(crate) fn debit(&self, amount: Decimal) -> AccountResult<Self> {
        self.ensure_funds(amount)?;

        Ok(Self {
            balance: self.balance - amount,
            ..self.clone()
        })
    }

    /// Writes the account back into the slot found by [`Account::position`].
    pub(crate) fn update(self, index: usize, store: &mut Store) {
        store.accounts[index] = self;
    }

    /// Get the account's id.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Get the account's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the account's number.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}
