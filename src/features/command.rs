use super::account::AccountId;
use super::store::Store;
use super::transaction::{Transaction, TransactionError, TransactionKind};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Transfer from {0} has no destination account")]
    MissingDestination(AccountId),

    #[error("A {kind} does not take a destination account (got {to})")]
    UnexpectedDestination { kind: TransactionKind, to: AccountId },

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

/// One user action as recorded in a command file.
///
/// `account` is the deposit target, the withdrawal source or the transfer
/// source; `to` is only used by transfers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LedgerCommand {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub account: AccountId,

    #[serde(default)]
    pub to: Option<AccountId>,

    pub amount: Decimal,

    #[serde(default)]
    pub description: Option<String>,
}

impl LedgerCommand {
    pub fn apply(self, store: &mut Store) -> Result<&Transaction, CommandError> {
        use TransactionKind::*;

        let description = self.description.as_deref().filter(|text| !text.is_empty());

        let tx = match (self.kind, &self.to) {
            (Deposit, None) => store.deposit(&self.account, self.amount, description)?,
            (Withdrawal, None) => store.withdraw(&self.account, self.amount, description)?,
            (Transfer, Some(to)) => store.transfer(&self.account, to, self.amount, description)?,
            (Transfer, None) => return Err(CommandError::MissingDestination(self.account)),
            (kind, Some(to)) => {
                return Err(CommandError::UnexpectedDestination {
                    kind,
                    to: to.clone(),
                })
            }
        };
        Ok(tx)
    }
}

/// Outcome of feeding a command file through a store
#[derive(Debug, Default)]
pub struct Replay {
    pub applied: usize,

    /// 1-based data row and the reason it was skipped
    pub rejected: Vec<(usize, String)>,
}

/// Applies every row in order. Rows that fail to parse or that the store
/// refuses are recorded and skipped; the rest of the file still runs.
pub fn replay<R: io::Read>(rdr: &mut csv::Reader<R>, store: &mut Store) -> Replay {
    let mut outcome = Replay::default();

    for (line, result) in rdr.deserialize::<LedgerCommand>().enumerate() {
        let row = line + 1;
        let applied = match result {
            Ok(command) => command.apply(store).map(|_| ()).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Malformed command: {e}")),
        };

        match applied {
            Ok(()) => outcome.applied += 1,
            Err(reason) => outcome.rejected.push((row, reason)),
        }
    }
    outcome
}
