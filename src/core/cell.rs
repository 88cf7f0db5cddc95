// src/core/cell.rs
//! Cell content as handed to the grid assembler.
//!
//! A cell is either a DOM element (text and span attributes are read from
//! it), a value the caller already extracted, or nothing at all. Only
//! element cells can span; the other two always cover a single slot.

use scraper::ElementRef;

use crate::config::consts::{COLSPAN_ATTR, MAX_COLSPAN, MAX_ROWSPAN, ROWSPAN_ATTR};

#[derive(Clone, Debug)]
pub enum Cell<'a> {
    Node(ElementRef<'a>),
    Text(String),
    Empty,
}

impl<'a> Cell<'a> {
    /// Text for the grid, trimmed at both ends. Interior whitespace is kept.
    pub fn value(&self) -> String {
        match self {
            Cell::Node(el) => el.text().collect::<String>().trim().to_string(),
            Cell::Text(text) => text.trim().to_string(),
            Cell::Empty => s!(),
        }
    }

    pub fn rowspan(&self) -> usize {
        match self {
            Cell::Node(el) => parse_span(el.value().attr(ROWSPAN_ATTR), MAX_ROWSPAN),
            _ => 1,
        }
    }

    pub fn colspan(&self) -> usize {
        match self {
            Cell::Node(el) => parse_span(el.value().attr(COLSPAN_ATTR), MAX_COLSPAN),
            _ => 1,
        }
    }
}

impl<'a> From<ElementRef<'a>> for Cell<'a> {
    fn from(el: ElementRef<'a>) -> Self {
        Cell::Node(el)
    }
}

impl<'a> From<Option<ElementRef<'a>>> for Cell<'a> {
    fn from(el: Option<ElementRef<'a>>) -> Self {
        el.map_or(Cell::Empty, Cell::Node)
    }
}

impl From<String> for Cell<'_> {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell<'_> {
    fn from(text: &str) -> Self {
        Cell::Text(s!(text))
    }
}

/// Read a span attribute the way HTML reads non-negative integers: skip
/// leading whitespace, allow a `+`, take the leading digits and ignore the
/// rest (`"2x"` is 2). Absent, no leading digits (`"abc"`, `"-2"`), or a
/// value outside `1..=max` gives 1.
pub fn parse_span(raw: Option<&str>, max: usize) -> usize {
    let Some(raw) = raw else { return 1 };
    let text = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();

    // Overflow is just another out-of-range value
    match text[..digits].parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => n,
        _ => {
            logd!("span attribute {raw:?} normalized to 1");
            1
        }
    }
}
