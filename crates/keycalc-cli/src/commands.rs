//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// keycalc: press calculator keys from the command line
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons in order and print the display
    ///
    /// Tokens are keypad labels (0-9 . + - * / = C ± √ x²) or their ASCII
    /// aliases (neg, sqrt, sq, x). With no tokens, whitespace-separated
    /// tokens are read from stdin.
    Press(PressArgs),

    /// List the keypad buttons and accepted aliases
    Keys,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button tokens, pressed left to right
    pub tokens: Vec<String>,

    /// Print the display after every press
    #[arg(short, long)]
    pub trace: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain display text
    #[default]
    Text,
    /// JSON snapshot of the controller
    Json,
}
