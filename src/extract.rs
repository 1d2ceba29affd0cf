//! # Extract — Record Extraction from the Listing
//!
//! Consumes a line stream once, front to back, and turns every ranked entry
//! into a [`Record`]. Each line is classified on its own; the only state
//! carried across lines is the growing [`Extraction`].
//!
//! | Line                                  | Result                          |
//! |---------------------------------------|---------------------------------|
//! | header, footer, comment, blank        | skipped silently                |
//! | ranked but truncated or corrupt       | `regexerr:` warning, counted    |
//! | full entry                            | record appended                 |
//! | full entry, digit count unparseable   | `digiterr:` warning, policy     |
//!
//! Under [`DigitPolicy::Zero`] an unparseable digit count still yields a
//! record whose `digits` is `None` (reported as 0). Under
//! [`DigitPolicy::Reject`] the record is dropped and counted in `rejected`.

use crate::config::{Config, DigitPolicy};
use crate::pattern::{LineMatch, LinePattern};
use crate::record::Record;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::BufRead;
use tracing::{debug, warn};

/// Result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Records in document order.
    pub records: Vec<Record>,
    pub lines_read: usize,
    /// Ranked lines skipped because they did not yield every field.
    pub malformed: usize,
    /// Entries whose digit count failed to parse.
    pub digit_anomalies: usize,
    /// Entries dropped by [`DigitPolicy::Reject`].
    pub rejected: usize,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    pattern: LinePattern,
    digit_policy: DigitPolicy,
}

impl Extractor {
    pub fn new(pattern: LinePattern, digit_policy: DigitPolicy) -> Self {
        Extractor {
            pattern,
            digit_policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Extractor::new(config.pattern.clone(), config.digit_policy)
    }

    /// Extract records from a reader, one line at a time. Bytes that are not
    /// valid UTF-8 are replaced rather than aborting the run; a read error
    /// (e.g. the connection dropping mid-body) is returned.
    pub fn extract<R: BufRead>(&self, mut reader: R) -> Result<Extraction> {
        let mut out = Extraction::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed reading line {}", out.lines_read + 1))?;
            if n == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.process_line(trim_line_ending(&line), &mut out);
        }
        self.finish(&out);
        Ok(out)
    }

    /// Extract records from lines already in memory.
    pub fn extract_lines<I, S>(&self, lines: I) -> Extraction
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Extraction::default();
        for line in lines {
            self.process_line(line.as_ref(), &mut out);
        }
        self.finish(&out);
        out
    }

    fn process_line(&self, line: &str, out: &mut Extraction) {
        out.lines_read += 1;
        let fields = match self.pattern.classify(line) {
            LineMatch::NoMatch => return,
            LineMatch::Malformed => {
                warn!("regexerr: {}", line);
                out.malformed += 1;
                return;
            }
            LineMatch::Fields(fields) => fields,
        };

        let digits = fields.digits.parse::<u64>().ok();
        if digits.is_none() {
            warn!("digiterr: {}", line);
            out.digit_anomalies += 1;
            if self.digit_policy == DigitPolicy::Reject {
                out.rejected += 1;
                return;
            }
        }

        out.records.push(Record {
            rank: fields.rank.to_string(),
            expression: fields.expression.to_string(),
            digits,
            date: fields.date.to_string(),
            description: fields.description.to_string(),
        });
    }

    fn finish(&self, out: &Extraction) {
        debug!(
            lines = out.lines_read,
            records = out.records.len(),
            malformed = out.malformed,
            digit_anomalies = out.digit_anomalies,
            rejected = out.rejected,
            "extraction finished"
        );
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
