mod account;
mod command;
mod config;
mod currency;
mod dashboard;
mod format;
mod seed;
mod store;
mod transaction;

pub use self::{
    account::{Account, AccountError, AccountId},
    command::{replay, CommandError, LedgerCommand, Replay},
    config::SeedConfig,
    currency::{Currency, UnknownCurrency},
    dashboard::{Dashboard, Snapshot},
    format::format_amount,
    store::{SeedError, Store},
    transaction::{Transaction, TransactionError, TransactionId, TransactionKind, TransactionResult},
};
