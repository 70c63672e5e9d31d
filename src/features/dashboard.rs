use prettytable::{format, row, Table};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::{
    account::{Account, AccountId},
    currency::Currency,
    format::format_amount,
    store::Store,
    transaction::Transaction,
};

/// Read-only text view of a store: PLN total, accounts, transaction log.
pub struct Dashboard<'a> {
    store: &'a Store,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn accounts_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row!["Name", "Number", "Currency", r->"Balance"]);

        for account in self.store.accounts() {
            table.add_row(row![
                account.name(),
                account.number(),
                account.currency(),
                r->format_amount(account.balance(), account.currency()),
            ]);
        }
        table.add_row(row![H4->format!("Accounts: {}", self.store.total_accounts())]);
        table
    }

    pub fn transactions_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row!["Date", "Type", r->"Amount", "From", "To", "Description"]);

        for tx in self.store.transactions() {
            table.add_row(row![
                tx.ts().format("%Y-%m-%d"),
                tx.kind(),
                r->format_amount(tx.amount(), tx.currency()),
                self.account_name(tx.from_account_id()),
                self.account_name(tx.to_account_id()),
                tx.description().filter(|text| !text.is_empty()).unwrap_or("-"),
            ]);
        }
        table
    }

    fn account_name(&self, id: Option<&AccountId>) -> &'a str {
        id.and_then(|id| self.store.get_account(id))
            .map(Account::name)
            .unwrap_or("-")
    }
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account-Fin")?;
        writeln!(
            f,
            "PLN Balance: {}",
            format_amount(self.store.total_balance(Currency::Pln), Currency::Pln)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.accounts_table())?;
        writeln!(f)?;
        write!(f, "{}", self.transactions_table())
    }
}

/// Machine-readable counterpart of [`Dashboard`].
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub total_accounts: usize,
    pub total_transactions: usize,
    pub total_balances: BTreeMap<Currency, Decimal>,
    pub accounts: &'a [Account],
    pub transactions: Vec<&'a Transaction>,
}

impl<'a> From<&'a Store> for Snapshot<'a> {
    fn from(store: &'a Store) -> Self {
        Self {
            total_accounts: store.total_accounts(),
            total_transactions: store.total_transactions(),
            total_balances: store.balances_by_currency(),
            accounts: store.accounts(),
            transactions: store.transactions().collect(),
        }
    }
}
