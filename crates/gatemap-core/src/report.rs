//! Human-readable conversion summary.

use std::collections::BTreeSet;
use std::fmt;

/// Printed when the platform references no instructions at all.
pub const NO_GATES_MESSAGE: &str = "No instructions found!";
/// Printed when every name was mapped.
pub const ALL_RECOGNIZED_MESSAGE: &str =
    "All gates were heuristically recognized! Double-check the file, though.";
/// Header of the unmapped-name list.
pub const UNRECOGNIZED_HEADER: &str = "The following gates were not automatically recognized:";
/// Trailer of the unmapped-name list.
pub const EDIT_REQUIRED_MESSAGE: &str = "You'll need to edit the output file!";

/// Outcome of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// The extractor found nothing.
    pub no_gates_found: bool,
    /// Number of distinct names written.
    pub total: usize,
    /// Names that received the unknown placeholder.
    pub unmapped: BTreeSet<String>,
}

impl Report {
    /// True when no hand editing is needed.
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty()
    }

    pub fn num_mapped(&self) -> usize {
        self.total - self.unmapped.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.no_gates_found {
            writeln!(f, "{NO_GATES_MESSAGE}")?;
        }
        if self.is_clean() {
            return write!(f, "{ALL_RECOGNIZED_MESSAGE}");
        }
        writeln!(f, "{UNRECOGNIZED_HEADER}")?;
        writeln!(f)?;
        for name in &self.unmapped {
            writeln!(f, " - {name}")?;
        }
        writeln!(f)?;
        write!(f, "{EDIT_REQUIRED_MESSAGE}")
    }
}
