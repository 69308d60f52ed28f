//! Parses the command line arguments and runs the requested command.
//!
//! Basic usage:
//!
//! ```text
//! netaddr inspect 127.0.0.1 ::1 fe80::1%2
//! netaddr --log -vv sort --unique 10.0.0.2 ::1 10.0.0.1 10.0.0.2
//! ```

use crate::{logging, report};
use clap::{Parser, Subcommand};
use netaddr_core::AddressError;
use std::io::{self, Write};
use thiserror::Error as ThisError;

/// Stores the different command line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Parse, classify and sort IP addresses")]
pub struct Args {
    /// Turn logging on, written to stderr.
    #[arg(short, long, global = true)]
    pub log: bool,
    /// Write log lines as JSON.
    #[arg(long, global = true, requires = "log")]
    pub json: bool,
    /// Raise the log level; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form, family and traits of each address.
    Inspect {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print the addresses in ascending order, IPv4 before IPv6.
    Sort {
        /// Print each distinct address once.
        #[arg(short, long)]
        unique: bool,
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("{failed} of {total} addresses could not be parsed")]
    InvalidAddresses { failed: usize, total: usize },
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to set up logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Runs the command described by `args`, writing its report to `out`.
pub fn run(args: Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.log {
        logging::init_events(args.json, args.verbose)?;
    }
    match args.command {
        Command::Inspect { addresses } => inspect(&addresses, out),
        Command::Sort { unique, addresses } => {
            for address in report::sort(&addresses, unique)? {
                writeln!(out, "{}", address)?;
            }
            Ok(())
        }
    }
}

/// Reports every input, valid or not, and fails afterwards if any was
/// invalid.
fn inspect(addresses: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let mut failed = 0;
    for text in addresses {
        match report::inspect(text) {
            Ok(inspection) => writeln!(out, "{}", inspection)?,
            Err(e) => {
                tracing::info!("Skipping {:?}: {}", text, e);
                failed += 1;
                writeln!(out, "{}\terror\t{}", text, e)?;
            }
        }
    }
    if failed > 0 {
        return Err(CliError::InvalidAddresses {
            failed,
            total: addresses.len(),
        });
    }
    Ok(())
}
