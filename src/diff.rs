// src/diff.rs
//! Row-by-row, cell-by-cell comparison of an expected table against an
//! extracted grid.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    RowCount { expected: usize, actual: usize },
    RowWidth { row: usize, expected: usize, actual: usize },
    Cell { row: usize, col: usize, expected: String, actual: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::RowCount { expected, actual } => {
                write!(f, "row count: expected {expected}, got {actual}")
            }
            Mismatch::RowWidth { row, expected, actual } => {
                write!(f, "row {row}: expected {expected} cells, got {actual}")
            }
            Mismatch::Cell { row, col, expected, actual } => {
                write!(f, "cell ({row}, {col}): expected {expected:?}, got {actual:?}")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableDiff {
    pub mismatches: Vec<Mismatch>,
}

impl TableDiff {
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for TableDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mismatches {
            writeln!(f, "{m}")?;
        }
        Ok(())
    }
}

/// Compare two tables. Cells are compared over the region both tables have;
/// differing row counts and widths are reported once each.
pub fn diff_grids<E, A>(expected: &[Vec<E>], actual: &[Vec<A>]) -> TableDiff
where
    E: AsRef<str>,
    A: AsRef<str>,
{
    let mut mismatches = Vec::new();

    if expected.len() != actual.len() {
        mismatches.push(Mismatch::RowCount { expected: expected.len(), actual: actual.len() });
    }

    for (row, (exp, act)) in expected.iter().zip(actual).enumerate() {
        if exp.len() != act.len() {
            mismatches.push(Mismatch::RowWidth { row, expected: exp.len(), actual: act.len() });
        }
        for (col, (e, a)) in exp.iter().zip(act).enumerate() {
            let (e, a) = (e.as_ref(), a.as_ref());
            if e != a {
                mismatches.push(Mismatch::Cell {
                    row,
                    col,
                    expected: s!(e),
                    actual: s!(a),
                });
            }
        }
    }

    TableDiff { mismatches }
}
