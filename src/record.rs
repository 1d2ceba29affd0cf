//! # Record — One Entry of the Prime Listing
//!
//! A `Record` is built from a single ranked line of the list of largest known
//! primes. Fields are taken verbatim from the line's capture groups; only the
//! digit count is parsed as an integer.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Position in the listing, digits only. The optional letter suffix
    /// (`12a`) is dropped.
    pub rank: String,
    /// Symbolic form of the prime, e.g. `2^82589933-1`.
    pub expression: String,
    /// Stated decimal digit count. `None` when the field did not parse as an
    /// integer; such records report a digit count of 0.
    pub digits: Option<u64>,
    /// Discovery date token as written in the listing.
    pub date: String,
    /// Free-text remainder of the line (discoverer codes, comments).
    pub description: String,
}

impl Record {
    /// Digit count with unparsed values reported as 0.
    pub fn digit_count(&self) -> u64 {
        self.digits.unwrap_or(0)
    }

    /// True when the digit count came from a failed parse rather than the line.
    pub fn digits_unparsed(&self) -> bool {
        self.digits.is_none()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prime: {}, Num. Digits: {}, Desc: {}",
            self.expression,
            self.digit_count(),
            self.description
        )
    }
}
