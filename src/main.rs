use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use patmatch::{Bindings, Dispatcher, Limits, Matcher, Value};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PATMATCH_GIT_DESCRIBE"),
    ")"
);

// Parsing recurses once per nesting level, so the binary always keeps a bound.
const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Parser)]
#[command(name = "patmatch")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Destructure JSON values with textual patterns")]
struct Cli {
    /// Log matching decisions to stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,
    /// Reject patterns nested deeper than this
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Reject pattern text longer than this many bytes
    #[arg(long, global = true)]
    max_len: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match one pattern and print its bindings, or `false`
    Extract {
        #[arg(allow_negative_numbers = true)]
        pattern: String,
        #[command(flatten)]
        input: Input,
    },
    /// Try patterns in order and report the first one that matches
    Match {
        #[arg(required = true, allow_negative_numbers = true)]
        patterns: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// JSON value given inline
    #[arg(long, conflicts_with = "file", allow_negative_numbers = true)]
    value: Option<String>,
    /// Path to a file holding the JSON value (stdin when neither is given)
    #[arg(long)]
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> Result<Value> {
        let src = match (&self.value, &self.file) {
            (Some(v), _) => v.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            (None, None) => io::read_to_string(io::stdin()).context("reading stdin")?,
        };
        serde_json::from_str(&src).context("value must be JSON null, bool, number, string or array")
    }
}

#[derive(Clone, Serialize)]
struct Report {
    arm: usize,
    pattern: String,
    bindings: Bindings,
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if debug => EnvFilter::new("patmatch=debug"),
        Err(_) => return,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let matcher = Matcher::with_limits(Limits {
        max_depth: Some(cli.max_depth),
        max_len: cli.max_len,
    });

    match cli.command {
        Command::Extract { pattern, input } => {
            let value = input.read()?;
            match matcher.parse(&pattern, &value)? {
                Some(bindings) => {
                    println!("{}", serde_json::to_string(&bindings)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("false");
                    Ok(ExitCode::from(1))
                }
            }
        }
        Command::Match { patterns, input } => {
            let value = input.read()?;
            let mut dispatcher = Dispatcher::with_matcher(matcher);
            for (arm, pattern) in patterns.iter().enumerate() {
                let name = pattern.clone();
                dispatcher = dispatcher.on(pattern, move |bindings| Report {
                    arm,
                    pattern: name.clone(),
                    bindings,
                });
            }
            let report = dispatcher.dispatch(&value)?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
