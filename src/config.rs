//! # Config — Construction-Time Configuration
//!
//! Everything the fetcher and extractor need is carried in a [`Config`] value:
//! source URL (or local input file), timeout, TLS policy, record pattern,
//! digit-count policy and output format. There is no process-wide state.
//!
//! Values come from three layers, later layers winning:
//!
//! 1. Built-in defaults.
//! 2. An optional TOML file (`--config primelist.toml`).
//! 3. CLI flags and their `PRIMELIST_*` environment variables.
//!
//! ```toml
//! url = "https://t5k.org/primes/lists/all.txt"
//! timeout_secs = 30
//! insecure_tls = false
//! digit_policy = "reject"
//! format = "json"
//! ```

use crate::error::ConfigError;
use crate::pattern::LinePattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The Prime Pages list of the largest known primes.
pub const DEFAULT_URL: &str = "https://t5k.org/primes/lists/all.txt";

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// What to do with an entry whose digit count does not parse as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigitPolicy {
    /// Keep the record and report a digit count of 0.
    #[default]
    Zero,
    /// Drop the record.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Partially specified configuration, as read from a TOML file or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub url: Option<String>,
    pub input: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub insecure_tls: Option<bool>,
    pub pattern: Option<String>,
    pub digit_policy: Option<DigitPolicy>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `other` on top of `self`: any value set in `other` wins.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            url: other.url.or(self.url),
            input: other.input.or(self.input),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            insecure_tls: other.insecure_tls.or(self.insecure_tls),
            pattern: other.pattern.or(self.pattern),
            digit_policy: other.digit_policy.or(self.digit_policy),
            format: other.format.or(self.format),
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    /// Read this file (`-` for stdin) instead of fetching `url`.
    pub input: Option<PathBuf>,
    pub timeout: Duration,
    /// Skip TLS certificate verification. Off unless explicitly requested.
    pub insecure_tls: bool,
    pub pattern: LinePattern,
    pub digit_policy: DigitPolicy,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            input: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            insecure_tls: false,
            pattern: LinePattern::default(),
            digit_policy: DigitPolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl TryFrom<Settings> for Config {
    type Error = ConfigError;

    fn try_from(settings: Settings) -> Result<Self, Self::Error> {
        let pattern = match settings.pattern.as_deref() {
            Some(p) => LinePattern::new(p)?,
            None => LinePattern::default(),
        };
        Ok(Config {
            url: settings.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            input: settings.input,
            timeout: Duration::from_secs(settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            insecure_tls: settings.insecure_tls.unwrap_or(false),
            pattern,
            digit_policy: settings.digit_policy.unwrap_or_default(),
            format: settings.format.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::DEFAULT_RECORD_PATTERN;
    use std::io::Write;

    #[test]
    fn defaults_verify_tls_and_use_t5k() {
        let config = Config::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(!config.insecure_tls);
        assert_eq!(config.digit_policy, DigitPolicy::Zero);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.pattern.as_str(), DEFAULT_RECORD_PATTERN);
    }

    #[test]
    fn empty_settings_resolve_to_defaults() {
        let config = Config::try_from(Settings::default()).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert!(config.input.is_none());
        assert!(!config.insecure_tls);
    }

    #[test]
    fn load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "url = \"http://mirror.example/all.txt\"\ntimeout_secs = 30\ninsecure_tls = true\ndigit_policy = \"reject\"\nformat = \"json\""
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.url.as_deref(), Some("http://mirror.example/all.txt"));
        assert_eq!(settings.timeout_secs, Some(30));
        assert_eq!(settings.insecure_tls, Some(true));
        assert_eq!(settings.digit_policy, Some(DigitPolicy::Reject));
        assert_eq!(settings.format, Some(OutputFormat::Json));

        let config = Config::try_from(settings).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.insecure_tls);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "uri = \"http://typo.example\"").unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        assert!(matches!(
            Settings::load(Path::new("/nonexistent/primelist.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn later_layer_wins() {
        let file = Settings {
            url: Some("http://file.example".to_string()),
            timeout_secs: Some(60),
            format: Some(OutputFormat::Json),
            ..Settings::default()
        };
        let cli = Settings {
            url: Some("http://cli.example".to_string()),
            ..Settings::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.url.as_deref(), Some("http://cli.example"));
        assert_eq!(merged.timeout_secs, Some(60));
        assert_eq!(merged.format, Some(OutputFormat::Json));
    }

    #[test]
    fn bad_pattern_fails_resolution() {
        let settings = Settings {
            pattern: Some(r"^\s+(\d+)".to_string()),
            ..Settings::default()
        };
        assert!(matches!(
            Config::try_from(settings),
            Err(ConfigError::TooFewGroups { found: 1, .. })
        ));
    }
}
