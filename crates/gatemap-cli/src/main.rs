//! platform2gates
//!
//! Generates the gate map DQCsim's OpenQL mapper needs from an OpenQL
//! platform description.
//!
//! ```text
//! platform2gates [-v...] [--verify] <input:platform.json> <output:gates.json>
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{common, convert};

/// Generate a DQCsim gate map from an OpenQL platform description
#[derive(Parser)]
#[command(name = "platform2gates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reload the written gate map and check every entry
    #[arg(long)]
    verify: bool,

    /// OpenQL platform description (JSON)
    input: PathBuf,

    /// Gate map to write (JSON)
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", common::usage());
            std::process::exit(1);
        }
    };

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = convert::execute(&cli.input, &cli.output, cli.verify) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
