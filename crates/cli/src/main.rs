//! Corebank CLI - Main entry point
//!
//! Thin I/O layer over the bank core: reads menu choices from stdin,
//! calls into `corebank-bank`, and prints results and AML warnings.
//! No ledger invariants live here.

mod shell;

use clap::Parser;
use corebank_aml::{AmlConfig, AmlDetector};
use corebank_bank::Bank;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "corebank")]
#[command(about = "Corebank - In-memory account ledger with AML heuristics", long_about = None)]
struct Cli {
    /// AML threshold configuration file (JSON); defaults apply if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &cli.config {
        Some(path) => AmlConfig::from_file(path)?,
        None => AmlConfig::default(),
    };

    let mut bank = Bank::new(AmlDetector::new(config));
    shell::run(&mut bank)
}
