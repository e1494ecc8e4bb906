//! All kinds of errors in this crate.

use displaydoc::Display;
use std::num::ParseIntError;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Rule {0} is out of range (0-255).
    InvalidRule(isize),
    /// Invalid rule: {0}.
    ParseRuleError(#[from] ParseIntError),
    /// Invalid initial configuration: {0}.
    InvalidConfiguration(ConfigurationIssue),
    /// Number of generations should be positive, got {0}.
    InvalidGenerationCount(isize),
    /// Width should be at least 3, got {0}.
    InvalidWidth(isize),
}

/// Why an initial configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ConfigurationIssue {
    /// it contains no cells
    Empty,
    /// it has {0} cell(s), but at least 3 are needed
    TooShort(usize),
    /// it has an even number of cells ({0}) and padding is disabled
    EvenLength(usize),
    /// unexpected symbol {0:?} at position {1}, only 0 and 1 are allowed
    InvalidSymbol(char, usize),
}
