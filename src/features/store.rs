use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use chrono::Utc;
use rust_decimal::prelude::*;
use thiserror::Error;

use super::{
    account::{Account, AccountId},
    currency::Currency,
    seed,
    transaction::{
        Transaction, TransactionError, TransactionId, TransactionKind, TransactionResult,
    },
};

type Listener = Box<dyn FnMut(&Transaction) + Send>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Account id {0} appears more than once")]
    DuplicateAccount(AccountId),

    #[error("Account {account} starts with a negative balance of {balance}")]
    NegativeBalance { account: AccountId, balance: Decimal },

    #[error("Transaction id {0} appears more than once")]
    DuplicateTransaction(TransactionId),

    #[error("Transaction {id} has a non-positive amount of {amount}")]
    InvalidAmount { id: TransactionId, amount: Decimal },

    #[error("Transaction {id} does not reference its accounts the way a {kind} must")]
    MalformedReferences { id: TransactionId, kind: TransactionKind },

    #[error("Transaction {id} references unknown account {account}")]
    UnknownAccount { id: TransactionId, account: AccountId },

    #[error("Transaction {id} is in {found} but account {account} holds {expected}")]
    CurrencyMismatch {
        id: TransactionId,
        account: AccountId,
        expected: Currency,
        found: Currency,
    },
}

/// In-memory ledger: account balances plus an append-only transaction log
///
/// Every command validates fully before it mutates, so a failed call leaves
/// balances and the log exactly as they were.
pub struct Store {
    pub(crate) accounts: Vec<Account>,

    /// Newest first
    pub(crate) transactions: VecDeque<Transaction>,

    listeners: Vec<Listener>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("accounts", &self.accounts)
            .field("transactions", &self.transactions)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            transactions: VecDeque::new(),
            listeners: Vec::new(),
        }
    }

    /// Store holding the demo accounts and their transaction history.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.accounts = seed::accounts();
        store.transactions = sort_newest_first(seed::transactions());
        store
    }

    /// Seed transactions are history only; they are not replayed onto balances.
    pub fn from_parts(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, SeedError> {
        let mut account_ids = HashSet::new();
        for account in &accounts {
            if !account_ids.insert(account.id()) {
                return Err(SeedError::DuplicateAccount(account.id().clone()));
            }
            if account.balance() < Decimal::ZERO {
                return Err(SeedError::NegativeBalance {
                    account: account.id().clone(),
                    balance: account.balance(),
                });
            }
        }

        let mut transaction_ids = HashSet::new();
        for tx in &transactions {
            if !transaction_ids.insert(tx.id()) {
                return Err(SeedError::DuplicateTransaction(tx.id().clone()));
            }
            if tx.amount() <= Decimal::ZERO {
                return Err(SeedError::InvalidAmount {
                    id: tx.id().clone(),
                    amount: tx.amount(),
                });
            }
            check_references(tx, &accounts)?;
        }

        let mut store = Self::new();
        store.accounts = accounts;
        store.transactions = sort_newest_first(transactions);
        Ok(store)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Transaction log, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    pub fn latest_transaction(&self) -> Option<&Transaction> {
        self.transactions.front()
    }

    pub fn get_account(&self, id: &AccountId) -> Option<&Account> {
        Account::find_by_id(id, self)
    }

    pub fn total_accounts(&self) -> usize {
        self.accounts.len()
    }

    pub fn total_transactions(&self) -> usize {
        self.transactions.len()
    }

    /// Sum of balances over the accounts held in `currency`.
    pub fn total_balance(&self, currency: Currency) -> Decimal {
        self.accounts
            .iter()
            .filter(|account| account.currency() == currency)
            .map(Account::balance)
            .sum()
    }

    /// One total per currency that has at least one account.
    pub fn balances_by_currency(&self) -> BTreeMap<Currency, Decimal> {
        self.accounts
            .iter()
            .fold(BTreeMap::new(), |mut totals, account| {
                *totals.entry(account.currency()).or_insert(Decimal::ZERO) += account.balance();
                totals
            })
    }

    /// Registers a callback run with each transaction appended by a successful command.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Transaction) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn deposit(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> TransactionResult<&Transaction> {
        let index = Account::position(account_id, self)?;
        Transaction::ensure_positive(amount)?;

        let updated = self.accounts[index].credit(amount)?;
        let currency = updated.currency();
        updated.update(index, self);

        Ok(self.append(
            TransactionKind::Deposit,
            amount,
            currency,
            (None, Some(account_id.clone())),
            description,
        ))
    }

    pub fn withdraw(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> TransactionResult<&Transaction> {
        let index = Account::position(account_id, self)?;
        Transaction::ensure_positive(amount)?;

        let updated = self.accounts[index].debit(amount)?;
        let currency = updated.currency();
        updated.update(index, self);

        Ok(self.append(
            TransactionKind::Withdrawal,
            amount,
            currency,
            (Some(account_id.clone()), None),
            description,
        ))
    }

    /// Checks run in a fixed order: same account, existence of source then
    /// destination, positive amount, matching currency, sufficient funds.
    pub fn transfer(
        &mut self,
        from_id: &AccountId,
        to_id: &AccountId,
        amount: Decimal,
        description: Option<&str>,
    ) -> TransactionResult<&Transaction> {
        if from_id == to_id {
            return Err(TransactionError::SelfTransfer(from_id.clone()));
        }

        let from_index = Account::position(from_id, self)?;
        let to_index = Account::position(to_id, self)?;
        Transaction::ensure_positive(amount)?;

        let (from, to) = (&self.accounts[from_index], &self.accounts[to_index]);
        if from.currency() != to.currency() {
            return Err(TransactionError::CurrencyMismatch {
                from: from.currency(),
                to: to.currency(),
            });
        }

        let debited = from.debit(amount)?;
        let credited = to.credit(amount)?;
        let currency = debited.currency();

        debited.update(from_index, self);
        credited.update(to_index, self);

        Ok(self.append(
            TransactionKind::Transfer,
            amount,
            currency,
            (Some(from_id.clone()), Some(to_id.clone())),
            description,
        ))
    }

    fn append(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        currency: Currency,
        (from_account_id, to_account_id): (Option<AccountId>, Option<AccountId>),
        description: Option<&str>,
    ) -> &Transaction {
        let ts = Utc::now();
        let mut id = TransactionId::generate(ts);
        while self.transactions.iter().any(|tx| tx.id == id) {
            id = TransactionId::generate(ts);
        }

        self.transactions.push_front(Transaction {
            id,
            ts,
            kind,
            amount,
            currency,
            from_account_id,
            to_account_id,
            description: description.map(str::to_string),
        });

        let tx = &self.transactions[0];
        for listener in self.listeners.iter_mut() {
            listener(tx);
        }
        tx
    }
}

/// Deposits name only a destination, withdrawals only a source, transfers two
/// distinct accounts; every named account exists and shares the entry's currency.
fn check_references(tx: &Transaction, accounts: &[Account]) -> Result<(), SeedError> {
    use TransactionKind::*;

    let referenced = match (tx.kind(), tx.from_account_id(), tx.to_account_id()) {
        (Deposit, None, Some(to)) => vec![to],
        (Withdrawal, Some(from), None) => vec![from],
        (Transfer, Some(from), Some(to)) if from != to => vec![from, to],
        (kind, _, _) => {
            return Err(SeedError::MalformedReferences {
                id: tx.id().clone(),
                kind,
            })
        }
    };

    for account_id in referenced {
        let account = accounts
            .iter()
            .find(|account| account.id() == account_id)
            .ok_or_else(|| SeedError::UnknownAccount {
                id: tx.id().clone(),
                account: account_id.clone(),
            })?;
        if account.currency() != tx.currency() {
            return Err(SeedError::CurrencyMismatch {
                id: tx.id().clone(),
                account: account_id.clone(),
                expected: account.currency(),
                found: tx.currency(),
            });
        }
    }
    Ok(())
}

fn sort_newest_first(mut transactions: Vec<Transaction>) -> VecDeque<Transaction> {
    transactions.sort_by(|a, b| b.ts.cmp(&a.ts));
    transactions.into()
}
