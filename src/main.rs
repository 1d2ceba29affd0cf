//! # Main — CLI Entry Point
//!
//! Fetches the list of largest known primes (or reads a saved copy), extracts
//! the ranked entries, and prints a summary followed by one line per record.
//!
//! ## Options
//!
//! - `--url` / `PRIMELIST_URL`: listing to download (default: t5k.org all.txt).
//! - `--input` / `PRIMELIST_INPUT`: parse a local file instead (`-` = stdin).
//! - `--timeout-secs`: global request timeout (default 15).
//! - `--insecure-tls[=false]`: skip certificate verification. Interop only.
//!   An explicit `false` re-enables verification over the config file.
//! - `--pattern`: override the record pattern (5 capture groups).
//! - `--digit-policy`: `zero` keeps entries with unparseable digit counts,
//!   `reject` drops them.
//! - `--format`: `text` or `json`.
//! - `--config`: TOML file with any of the above; flags and env win.
//!
//! Logs and line diagnostics go to stderr. `LOG_FORMAT=json` switches to JSON
//! lines; `RUST_LOG` sets the filter.

use anyhow::Result;
use clap::Parser;
use primelist::config::{Config, DigitPolicy, OutputFormat, Settings};
use primelist::report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "primelist",
    version,
    about = "Extract records from the list of largest known primes"
)]
struct Cli {
    /// Optional TOML config file
    #[arg(long, env = "PRIMELIST_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the plaintext prime list
    #[arg(long, env = "PRIMELIST_URL")]
    url: Option<String>,

    /// Read the list from a local file ("-" for stdin) instead of downloading it
    #[arg(long, env = "PRIMELIST_INPUT")]
    input: Option<PathBuf>,

    /// Request timeout in seconds (default: 15)
    #[arg(long, env = "PRIMELIST_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Disable TLS certificate verification (`--insecure-tls=false` turns it back on)
    #[arg(
        long,
        env = "PRIMELIST_INSECURE_TLS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    insecure_tls: Option<bool>,

    /// Record pattern with 5 capture groups: rank, expression, digits, date, description
    #[arg(long, env = "PRIMELIST_PATTERN")]
    pattern: Option<String>,

    /// Handling of entries whose digit count does not parse
    #[arg(long, value_enum, env = "PRIMELIST_DIGIT_POLICY")]
    digit_policy: Option<DigitPolicy>,

    /// Output format
    #[arg(long, value_enum, env = "PRIMELIST_FORMAT")]
    format: Option<OutputFormat>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            url: self.url.clone(),
            input: self.input.clone(),
            timeout_secs: self.timeout_secs,
            insecure_tls: self.insecure_tls,
            pattern: self.pattern.clone(),
            digit_policy: self.digit_policy,
            format: self.format,
        }
    }

    fn resolve(&self) -> Result<Config> {
        let base = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(Config::try_from(base.merge(self.settings()))?)
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize structured logging: LOG_FORMAT=json for log shippers, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let config = cli.resolve()?;

    let extraction = primelist::run(&config)?;

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &extraction, config.format)
}
