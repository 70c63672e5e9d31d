use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{account::Account, store::Store, transaction::Transaction};

/// Alternative starting state for the store, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl SeedConfig {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let seed_file = std::fs::read_to_string(path)
            .with_context(|| format!("Couldn't read seed file {}", path.display()))?;
        Self::from_json(&seed_file)
            .with_context(|| format!("Couldn't parse seed file {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_store(self) -> anyhow::Result<Store> {
        Store::from_parts(self.accounts, self.transactions).context("Invalid seed data")
    }
}
