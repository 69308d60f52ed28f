use clap::Parser;
use netaddr::cli::{self, Args};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    let args = Args::parse();
    match cli::run(args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
