//! # Fetch — Opening the Listing Document
//!
//! A [`DocumentSource`] yields a forward-only line stream. The extractor never
//! needs the whole document in memory, so sources hand back a `BufRead` over
//! the live response body or file handle.
//!
//! - [`HttpSource`] downloads over HTTP(S) with a blocking `ureq` agent, a
//!   global timeout, and TLS verification unless explicitly disabled.
//! - [`FileSource`] reads a saved copy of the listing, or stdin for `-`.

use crate::config::Config;
use crate::error::FetchError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Something that can be opened once as a stream of listing lines.
pub trait DocumentSource {
    fn open(&self) -> Result<Box<dyn BufRead>, FetchError>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration, insecure_tls: bool) -> Self {
        if insecure_tls {
            warn!(url, "TLS certificate verification disabled");
        }
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .timeout_global(Some(timeout))
                .http_status_as_error(false)
                .tls_config(
                    ureq::tls::TlsConfig::builder()
                        .disable_verification(insecure_tls)
                        .build(),
                )
                .build(),
        );

        HttpSource {
            url: url.to_string(),
            agent,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        HttpSource::new(&config.url, config.timeout, config.insecure_tls)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the listing. Any status other than 200 is an error carrying the
    /// observed code; the body is not read in that case.
    pub fn fetch(&self) -> Result<Box<dyn BufRead>, FetchError> {
        let response = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| FetchError::Transport {
                url: self.url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        info!(url = %self.url, status, "prime list download started");
        Ok(Box::new(BufReader::new(response.into_body().into_reader())))
    }
}

impl DocumentSource for HttpSource {
    fn open(&self) -> Result<Box<dyn BufRead>, FetchError> {
        self.fetch()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Local file source. The path `-` reads stdin.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl DocumentSource for FileSource {
    fn open(&self) -> Result<Box<dyn BufRead>, FetchError> {
        if self.is_stdin() {
            return Ok(Box::new(std::io::stdin().lock()));
        }
        let file = File::open(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "<stdin>".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

/// Pick the source a config asks for: the input file when set, else the URL.
pub fn source_for(config: &Config) -> Box<dyn DocumentSource> {
    match &config.input {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(HttpSource::from_config(config)),
    }
}
