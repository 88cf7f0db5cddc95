// src/core/mod.rs

pub mod cell;
pub mod error;
pub mod grid;
pub mod selector;

pub use cell::Cell;
pub use error::{SelectorKind, TableError};
pub use grid::{Grid, GridBuilder};
pub use selector::{ColumnSelector, RowSelector};
