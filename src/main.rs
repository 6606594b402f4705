//! # Container
//!
//! Runs a container program from a file or standard input.
//!

mod term;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "container")]
#[command(about = "Runs a When container main(int): program")]
#[command(version)]
pub struct Cli {
    /// Program source file, or `-` to read standard input
    pub source: PathBuf,

    /// Answer an `input from` prompt ahead of time (PROMPT=VALUE)
    #[arg(short, long = "input", value_name = "PROMPT=VALUE", value_parser = term::parse_input)]
    pub inputs: Vec<(String, String)>,

    /// Deepest allowed nesting of procedure calls and blocks
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Stop the program after this many statements
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Read unanswered prompts as empty instead of asking on the terminal
    #[arg(long)]
    pub no_prompt: bool,
}

fn main() {
    init_tracing();
    std::process::exit(term::main(Cli::parse()));
}

/// Enabled with `RUST_LOG=container=debug` or `RUST_LOG=container=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
