//! In-memory bank ledger: accounts, an append-only transaction log and the
//! three commands (deposit, withdraw, transfer) that move money between them.

mod features;

pub use features::*;
