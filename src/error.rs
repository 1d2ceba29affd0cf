//! Error types for the fetch and configuration boundaries.
//!
//! Line-level problems (malformed entries, unparseable digit counts) are not
//! errors: they are logged and counted by the extractor.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to open the listing document. Always fatal for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, TLS, timeout.
    #[error("failed downloading primes from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The server answered with something other than 200 OK.
    #[error("failed download from {url}, received unexpected status code: {status}")]
    Status { url: String, status: u16 },

    /// A local input file could not be opened.
    #[error("failed opening {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line pattern declares {found} capture groups, at least {required} are needed")]
    TooFewGroups { found: usize, required: usize },

    #[error("failed reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
