//! # Pattern — Line Classification for the Prime Listing
//!
//! The listing interleaves ranked entries with headers, footers, comments and
//! blank lines. A ranked entry looks like
//!
//! ```text
//!   1    2^82589933-1          24862048 2018     Mersenne
//!   ^    ^                     ^        ^        ^
//!   rank expression            digits   date     description
//! ```
//!
//! Classification runs in two tiers:
//!
//! 1. The **record pattern** captures five groups: rank, expression, digit
//!    count, date, description. Expression and date are maximal
//!    non-whitespace runs; the description is the rest of the line.
//! 2. The **candidate pattern** recognizes any line that starts like a ranked
//!    entry (leading whitespace, digits, optional lowercase suffix). A
//!    candidate that fails to produce all five groups is a malformed match,
//!    typically a truncated or corrupted entry.
//!
//! Everything else is not a record and is skipped without comment. Indented
//! prose that opens with a number (`   5000 primes listed`) is indistinguishable
//! from a damaged entry and is reported as malformed.
//!
//! Both patterns are ASCII-only: digits are `[0-9]` and whitespace is
//! `[\t\n\f\r ]`. Unicode digits or no-break spaces never start an entry.

use crate::error::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// Capture groups every record pattern must provide, in order:
/// rank, expression, digit count, date, description.
pub const REQUIRED_GROUPS: usize = 5;

/// Default record pattern for the Prime Pages `all.txt` listing.
pub const DEFAULT_RECORD_PATTERN: &str = concat!(
    r"^[\t\n\f\r ]+([0-9]+)[a-z]?",
    r"[\t\n\f\r ]+([^\t\n\f\r ]+)",
    r"[\t\n\f\r ]+([0-9]+)",
    r"[\t\n\f\r ]+([^\t\n\f\r ]+)",
    r"[\t\n\f\r ]+(.*)",
);

const CANDIDATE_PATTERN: &str = r"^[\t\n\f\r ]+[0-9]+[a-z]?(?:[\t\n\f\r ]|$)";

static RECORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_RECORD_PATTERN).unwrap());
static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(CANDIDATE_PATTERN).unwrap());

/// Borrowed capture groups of a fully matched entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFields<'a> {
    pub rank: &'a str,
    pub expression: &'a str,
    pub digits: &'a str,
    pub date: &'a str,
    pub description: &'a str,
}

/// Outcome of testing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// Header, footer, comment or blank line.
    NoMatch,
    /// Looks like a ranked entry but does not yield all required groups.
    Malformed,
    Fields(LineFields<'a>),
}

/// Compiled record and candidate patterns.
#[derive(Debug, Clone)]
pub struct LinePattern {
    record: Regex,
    candidate: Regex,
}

impl Default for LinePattern {
    fn default() -> Self {
        LinePattern {
            record: RECORD_RE.clone(),
            candidate: CANDIDATE_RE.clone(),
        }
    }
}

impl LinePattern {
    /// Compile a custom record pattern. Groups 1..=5 are read as rank,
    /// expression, digit count, date and description.
    pub fn new(record_pattern: &str) -> Result<Self, ConfigError> {
        let record = Regex::new(record_pattern)?;
        let found = record.captures_len() - 1;
        if found < REQUIRED_GROUPS {
            return Err(ConfigError::TooFewGroups {
                found,
                required: REQUIRED_GROUPS,
            });
        }
        Ok(LinePattern {
            record,
            candidate: CANDIDATE_RE.clone(),
        })
    }

    /// Source text of the record pattern.
    pub fn as_str(&self) -> &str {
        self.record.as_str()
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineMatch<'a> {
        if let Some(caps) = self.record.captures(line) {
            let group = |i: usize| caps.get(i).map(|m| m.as_str());
            return match (group(1), group(2), group(3), group(4), group(5)) {
                (Some(rank), Some(expression), Some(digits), Some(date), Some(description)) => {
                    LineMatch::Fields(LineFields {
                        rank,
                        expression,
                        digits,
                        date,
                        description,
                    })
                }
                _ => LineMatch::Malformed,
            };
        }
        if self.candidate.is_match(line) {
            LineMatch::Malformed
        } else {
            LineMatch::NoMatch
        }
    }
}
