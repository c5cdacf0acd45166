//! lexgram CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use lexgram_runtime::{Cli, init_tracing, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e.context {
                Some(context) => eprintln!("\x1b[31mError: {e} ({context})\x1b[0m"),
                None => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            ExitCode::FAILURE
        }
    }
}
