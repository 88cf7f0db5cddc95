// src/core/error.rs
use std::{error::Error, fmt};

/// Which of the two selector arguments was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorKind {
    Row,
    Column,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Row => f.write_str("row"),
            SelectorKind::Column => f.write_str("column"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The selector text is not something the CSS engine accepts.
    /// Raised before the document is walked.
    InvalidSelector {
        kind: SelectorKind,
        selector: String,
        reason: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidSelector { kind, selector, reason } => {
                write!(f, "invalid {kind} selector {selector:?}: {reason}")
            }
        }
    }
}

impl Error for TableError {}
