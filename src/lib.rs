// src/lib.rs
//! Turn HTML tables (and table-like markup such as definition lists) into
//! plain rectangular grids of text, ready to compare against an expected
//! table in a test.
//!
//! ```
//! let html = r#"<table>
//!   <tr><th>tool</th><th>dude</th></tr>
//!   <tr><td>webrat</td><td>bryan</td></tr>
//! </table>"#;
//! let grid = tableish::extract_table(html, "table tr", "td, th").unwrap();
//! assert_eq!(grid, vec![vec!["tool", "dude"], vec!["webrat", "bryan"]]);
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod diff;
pub mod extract;

pub use crate::core::{Cell, ColumnSelector, Grid, GridBuilder, RowSelector, SelectorKind, TableError};
pub use crate::core::selector::next_element_sibling;
pub use diff::{diff_grids, Mismatch, TableDiff};
pub use extract::{extract_from_document, extract_table};
