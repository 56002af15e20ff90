//! keycalc: press calculator keys from the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc press 5 + 3 x 2 =        # prints 16
//! keycalc press --trace 1 6 sqrt   # display after every press
//! echo "8 / 0 =" | keycalc press   # tokens from stdin
//! keycalc --format json press 7 x  # controller snapshot
//! keycalc keys                     # keypad layout and aliases
//! ```

use clap::Parser;
use keycalc_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    logging::init(config.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Press(args) => handlers::run_press(&config, &args, io::stdin().lock(), &mut out),
        Commands::Keys => handlers::run_keys(&config, &mut out),
    }
}
