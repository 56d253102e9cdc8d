//! Passmith library crate
//!
//! This crate provides the core functionality for the `passmith` CLI. It is
//! organized into small modules: `config` (generation options and the derived
//! character pool), `sampler` (uniform character sampling), `state` (the
//! generator holding the current password), `clipboard` (cross-platform
//! clipboard helper), and `error` (crate error type). The binary `src/main.rs`
//! calls `passmith_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod sampler;
pub mod state;

use std::io::{self, BufRead};

use clap::{ArgAction, Parser, Subcommand};

use crate::clipboard::copy_to_clipboard;
use crate::config::{Configuration, MAX_LENGTH, MIN_LENGTH};
use crate::state::Generator;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a single password and print it
    Generate {
        /// Password length (clamped to 8..=100)
        #[arg(short = 'l', long = "length", default_value_t = MIN_LENGTH)]
        length: usize,

        /// Include digits 0-9 in the character pool
        #[arg(long = "digits", action = ArgAction::SetTrue)]
        digits: bool,

        /// Include symbols in the character pool
        #[arg(long = "symbols", action = ArgAction::SetTrue)]
        symbols: bool,

        /// Copy the result to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,
    },
    /// Interactive session: adjust options and watch the password regenerate
    Interactive,
}

/// Run the Passmith CLI.
///
/// This function is the high-level entrypoint used by the `passmith` binary.
/// It parses CLI arguments and dispatches to module functions. Fatal errors
/// are printed to stderr and cause a non-zero exit; a failed clipboard copy is
/// reported as a warning and is never fatal.
///
/// Behavior summary:
/// - `generate` — produce one password for the given options and optionally
///   copy it to the clipboard.
/// - `interactive` — line-driven session that regenerates the password on
///   every accepted option change.
///
/// Example:
///
/// ```no_run
/// passmith_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            length,
            digits,
            symbols,
            clipboard,
        } => {
            let config = Configuration::new(length, digits, symbols);
            let password = sampler::generate(&config).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });

            println!("{}", password);

            if clipboard && let Err(e) = copy_to_clipboard(&password) {
                eprintln!("warning: failed to copy to clipboard: {}", e);
            }
        }
        Commands::Interactive => {
            if let Err(e) = interactive() {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Line-driven interactive session.
///
/// One command per line on stdin; every accepted change prints the freshly
/// generated password. The session owns a [`Generator`], so the displayed
/// password and the value handed to the clipboard are always the same string.
fn interactive() -> error::Result<()> {
    let mut generator = Generator::new()?;
    print_help();
    println!("{}", generator.password());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else { continue };
        match cmd {
            "length" | "l" => match parts.next().and_then(|v| v.parse::<usize>().ok()) {
                Some(n) => println!("{}", generator.set_length(n)?),
                None => eprintln!("usage: length <{}..={}>", MIN_LENGTH, MAX_LENGTH),
            },
            "digits" | "d" => println!("{}", generator.toggle_digits()?),
            "symbols" | "s" => println!("{}", generator.toggle_symbols()?),
            "copy" | "c" => match copy_to_clipboard(generator.password()) {
                Ok(()) => println!("copied"),
                Err(e) => eprintln!("failed to copy to clipboard: {}", e),
            },
            "show" => {
                let config = generator.config();
                println!(
                    "{}  (length={}, digits={}, symbols={})",
                    generator.password(),
                    config.length(),
                    config.include_digits(),
                    config.include_symbols()
                );
            }
            "help" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            other => eprintln!("unknown command: {} (try `help`)", other),
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  length <n> (l)  set password length ({}..={})", MIN_LENGTH, MAX_LENGTH);
    println!("  digits     (d)  toggle digits 0-9");
    println!("  symbols    (s)  toggle symbols");
    println!("  copy       (c)  copy current password to clipboard");
    println!("  show            print current password and options");
    println!("  quit       (q)  exit");
}
