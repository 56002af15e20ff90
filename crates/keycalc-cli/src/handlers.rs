//! Command handlers
//!
//! Handlers write to any `Write` so tests can capture their output.

use crate::commands::PressArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use keycalc::controller::{Button, Controller};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Presses the requested buttons and prints the resulting display
///
/// Tokens come from the arguments, or from `input` when none were given.
/// Every token is validated before the first press, so an unknown token
/// fails the command without partially running it.
pub fn run_press<R, W>(
    config: &CliConfig,
    args: &PressArgs,
    input: R,
    out: &mut W,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let tokens = if args.tokens.is_empty() {
        read_tokens(input)?
    } else {
        args.tokens.clone()
    };
    if tokens.is_empty() {
        return Err(CliError::invalid_argument("no button tokens given"));
    }

    let buttons = tokens
        .iter()
        .map(|token| token.parse::<Button>())
        .collect::<Result<Vec<_>, _>>()?;
    info!(presses = buttons.len(), "running key sequence");

    let mut controller = Controller::new();
    for (token, button) in tokens.iter().zip(buttons) {
        controller.press(button);
        if args.trace {
            match config.format {
                OutputFormat::Text => writeln!(out, "{token} -> {}", controller.display())?,
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string(&controller.snapshot())?)?;
                }
            }
        }
    }

    debug!(snapshot = ?controller.snapshot(), "final state");
    match config.format {
        OutputFormat::Text => writeln!(out, "{}", controller.display())?,
        // Traced JSON already ended with the final snapshot
        OutputFormat::Json if args.trace => {}
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&controller.snapshot())?)?;
        }
    }
    Ok(())
}

fn read_tokens<R: BufRead>(input: R) -> CliResult<Vec<String>> {
    let mut tokens = Vec::new();
    for line in input.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

/// One keypad button as listed by `keys --format json`
#[derive(Debug, Serialize)]
struct KeyInfo {
    label: String,
    aliases: &'static [&'static str],
}

/// Prints the keypad in keypad order
pub fn run_keys<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    match config.format {
        OutputFormat::Text => {
            for row in Button::KEYPAD.chunks(Button::KEYPAD_COLUMNS) {
                let cells: Vec<String> = row.iter().map(|b| format!("{:<4}", b.label())).collect();
                writeln!(out, "{}", cells.concat().trim_end())?;
            }
            writeln!(out)?;
            writeln!(out, "aliases:")?;
            for button in Button::KEYPAD {
                if !button.aliases().is_empty() {
                    writeln!(out, "  {:<4}{}", button.label(), button.aliases().join(", "))?;
                }
            }
        }
        OutputFormat::Json => {
            let keys: Vec<KeyInfo> = Button::KEYPAD
                .iter()
                .map(|b| KeyInfo {
                    label: b.label(),
                    aliases: b.aliases(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&keys)?)?;
        }
    }
    Ok(())
}
