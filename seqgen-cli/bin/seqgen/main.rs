//! Sequence file generator
//!
//! Creates numbered files of an exact size filled with cryptographically
//! random data, for populating a filesystem with synthetic test fixtures.

use std::process;

mod opts;

use clap::Parser;
use opts::SeqgenOpts;

use seqgen_cli::run_cli;

const PROGRAM_NAME: &str = "seqgen";

fn main() {
    // Keep the documented exit code of 1 for missing or malformed arguments;
    // --help and --version still exit 0.
    let opts = match SeqgenOpts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            let _ = err.print();
            process::exit(i32::from(err.use_stderr()));
        }
    };

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            // `-qq` suppresses validation error messages but never changes
            // the exit code.
            if opts.quiet < 2 {
                eprintln!("{PROGRAM_NAME}: {err}");
            }
            process::exit(1);
        }
    };

    if let Err(err) = run_cli(&config) {
        if config.quiet < 2 {
            eprintln!("{PROGRAM_NAME}: {err}");
        }
        process::exit(1);
    }
}
