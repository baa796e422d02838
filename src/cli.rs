use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::solver::{Precision, Session};
use crate::utils::validate_digit_string;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Numeralize - express any number out of substrings of a base numeral
#[derive(Parser, Debug)]
#[command(name = "numeralize")]
#[command(
    about = "Build arithmetic expressions for requested numbers out of substrings of a base numeral"
)]
#[command(version)]
pub struct CliArgs {
    /// Base numeral whose substrings become the expression leaves
    pub base: String,

    /// Index with arbitrary-precision integers instead of 64-bit ones
    #[arg(short, long)]
    pub arbitrary_precision: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic: build the catalog for the requested
/// base, then answer one query per stdin line until EOF.
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    validate_digit_string(&args.base).context("Invalid base numeral")?;
    let precision = if args.arbitrary_precision {
        Precision::Arbitrary
    } else {
        Precision::Fixed
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "Initializing...\r")?;
    stdout.flush()?;

    let start = Instant::now();
    let session = Session::new(&args.base, precision).context("Failed to build the catalog")?;
    writeln!(
        stdout,
        "Initialized in {:.1} ms.",
        start.elapsed().as_secs_f64() * 1000.0
    )?;
    info!(
        "Catalog for '{}' ready with {} achievable integers",
        session.base(),
        session.catalog().len()
    );

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            match trimmed.parse::<f64>() {
                Ok(x) => match session.query(x) {
                    Ok(rendered) => writeln!(stdout, "{}", rendered)?,
                    Err(err) => {
                        warn!("Query for {} failed", x);
                        writeln!(stdout, "{}", err)?;
                    }
                },
                Err(_) => writeln!(stdout, "Not a number: {}", trimmed)?,
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
