use std::path::{Path, PathBuf};
use std::process;
#[macro_use]
extern crate log;

use account_fin::{Dashboard, SeedConfig, Snapshot, Store};
use anyhow::Context;
use clap::{ArgEnum, Parser};

#[derive(Parser)]
#[clap(version, about = "Replays bank commands against an in-memory ledger")]
struct Cli {
    /// JSON file with the starting accounts and transactions
    #[clap(short, long, env = "ACCOUNT_FIN_SEED", value_name = "FILE")]
    seed: Option<PathBuf>,

    /// How to print the resulting dashboard
    #[clap(short, long, arg_enum, default_value = "table")]
    output: Output,

    /// CSV file of commands: type, account, to, amount, description
    #[clap(value_name = "COMMANDS")]
    commands: Option<PathBuf>,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Output {
    Table,
    Json,
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut store = match &cli.seed {
        Some(path) => {
            let store = SeedConfig::from_path(path)?.into_store()?;
            info!("Loaded {} accounts from {}", store.total_accounts(), path.display());
            store
        }
        None => Store::seeded(),
    };

    if let Some(path) = &cli.commands {
        replay(path, &mut store)?;
    }

    match cli.output {
        Output::Table => print!("{}", Dashboard::new(&store)),
        Output::Json => println!("{}", serde_json::to_string_pretty(&Snapshot::from(&store))?),
    }
    Ok(())
}

fn replay(path: &Path, store: &mut Store) -> anyhow::Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Couldn't open command file {}", path.display()))?;

    let outcome = account_fin::replay(&mut rdr, store);
    for (row, reason) in &outcome.rejected {
        warn!("Row {row}: {reason}");
    }

    info!(
        "Replayed {} commands, rejected {}",
        outcome.applied,
        outcome.rejected.len()
    );
    Ok(())
}
