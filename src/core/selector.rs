// src/core/selector.rs
//! Row and column selectors.
//!
//! A selector is either CSS query text or a caller-supplied function. The
//! function form exists for structures that are not tables, e.g. a `<dl>`
//! whose rows are the `<dt>` elements and whose cells are each `<dt>` plus
//! the `<dd>` after it.
//!
//! Query text is compiled before the document is touched so a bad selector
//! fails the whole extraction up front.

use scraper::{ElementRef, Html, Selector};

use super::cell::Cell;
use super::error::{SelectorKind, TableError};

pub type RowFn<'f> = Box<dyn for<'a> Fn(&'a Html) -> Vec<ElementRef<'a>> + 'f>;
pub type CellFn<'f> = Box<dyn for<'a> Fn(ElementRef<'a>) -> Vec<Cell<'a>> + 'f>;

/// Picks the row elements out of a document.
pub enum RowSelector<'f> {
    ByQuery(String),
    ByFunction(RowFn<'f>),
}

/// Picks the cells out of one row.
pub enum ColumnSelector<'f> {
    ByQuery(String),
    ByFunction(CellFn<'f>),
}

impl<'f> RowSelector<'f> {
    pub fn query(text: impl Into<String>) -> Self {
        RowSelector::ByQuery(text.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a Html) -> Vec<ElementRef<'a>> + 'f,
    {
        RowSelector::ByFunction(Box::new(f))
    }

    pub fn compile(&self) -> Result<CompiledRowSelector<'_, 'f>, TableError> {
        match self {
            RowSelector::ByQuery(text) => {
                parse_css(SelectorKind::Row, text).map(CompiledRowSelector::Css)
            }
            RowSelector::ByFunction(f) => Ok(CompiledRowSelector::Function(f)),
        }
    }
}

impl<'f> ColumnSelector<'f> {
    pub fn query(text: impl Into<String>) -> Self {
        ColumnSelector::ByQuery(text.into())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: for<'a> Fn(ElementRef<'a>) -> Vec<Cell<'a>> + 'f,
    {
        ColumnSelector::ByFunction(Box::new(f))
    }

    pub fn compile(&self) -> Result<CompiledColumnSelector<'_, 'f>, TableError> {
        match self {
            ColumnSelector::ByQuery(text) => {
                parse_css(SelectorKind::Column, text).map(CompiledColumnSelector::Css)
            }
            ColumnSelector::ByFunction(f) => Ok(CompiledColumnSelector::Function(f)),
        }
    }
}

impl From<&str> for RowSelector<'_> {
    fn from(text: &str) -> Self {
        RowSelector::query(text)
    }
}

impl From<String> for RowSelector<'_> {
    fn from(text: String) -> Self {
        RowSelector::ByQuery(text)
    }
}

impl From<&str> for ColumnSelector<'_> {
    fn from(text: &str) -> Self {
        ColumnSelector::query(text)
    }
}

impl From<String> for ColumnSelector<'_> {
    fn from(text: String) -> Self {
        ColumnSelector::ByQuery(text)
    }
}

/// A row selector ready to run: parsed CSS, or a borrowed caller function.
pub enum CompiledRowSelector<'s, 'f> {
    Css(Selector),
    Function(&'s RowFn<'f>),
}

pub enum CompiledColumnSelector<'s, 'f> {
    Css(Selector),
    Function(&'s CellFn<'f>),
}

impl CompiledRowSelector<'_, '_> {
    /// Matching rows in document order (or the function's order).
    pub fn rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match self {
            CompiledRowSelector::Css(sel) => document.select(sel).collect(),
            CompiledRowSelector::Function(f) => f(document),
        }
    }
}

impl CompiledColumnSelector<'_, '_> {
    /// Cells of one row. CSS matches descendants of `row` only.
    pub fn cells<'a>(&self, row: ElementRef<'a>) -> Vec<Cell<'a>> {
        match self {
            CompiledColumnSelector::Css(sel) => row.select(sel).map(Cell::Node).collect(),
            CompiledColumnSelector::Function(f) => f(row),
        }
    }
}

pub fn resolve_rows<'a>(
    document: &'a Html,
    selector: &RowSelector<'_>,
) -> Result<Vec<ElementRef<'a>>, TableError> {
    Ok(selector.compile()?.rows(document))
}

pub fn resolve_cells<'a>(
    row: ElementRef<'a>,
    selector: &ColumnSelector<'_>,
) -> Result<Vec<Cell<'a>>, TableError> {
    Ok(selector.compile()?.cells(row))
}

fn parse_css(kind: SelectorKind, text: &str) -> Result<Selector, TableError> {
    let invalid = |reason: String| TableError::InvalidSelector {
        kind,
        selector: s!(text),
        reason,
    };
    if text.trim().is_empty() {
        return Err(invalid(s!("selector is empty")));
    }
    Selector::parse(text).map_err(|e| invalid(e.to_string()))
}

/// The element that follows `el` among its siblings, skipping text and
/// comment nodes. Handy inside function selectors (`<dt>` → `<dd>`).
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}
