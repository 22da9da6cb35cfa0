//! Toy robot simulator - interactive console.
//!
//! Reads commands from standard input (or a script file) until `X` or end of input.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use toy_robot::CommandInterpreter;
use toy_robot::console::{self, ConsoleConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "toy-robot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Drive a toy robot around a 5x5 table with PLACE X,Y,F / MOVE / LEFT / RIGHT / REPORT."
)]
struct Cli {
    /// Read commands from this file instead of standard input.
    #[clap(long, short)]
    file: Option<PathBuf>,

    /// Do not print the prompt or the exit message.
    #[clap(long, short)]
    quiet: bool,

    /// Log to stderr: -v info, -vv debug, -vvv trace. RUST_LOG overrides.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if cli.quiet {
        ConsoleConfig::quiet()
    } else {
        ConsoleConfig::default()
    };
    let mut interpreter = CommandInterpreter::new();
    let mut stdout = io::stdout().lock();

    let session = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open command file {}", path.display()))?;
            console::run(&mut interpreter, BufReader::new(file), &mut stdout, &config)
        }
        None => console::run(&mut interpreter, io::stdin().lock(), &mut stdout, &config),
    };
    session.context("console I/O failed")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}
