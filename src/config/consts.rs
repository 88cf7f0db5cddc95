// src/config/consts.rs

// Logging
pub const LOG_ENV: &str = "TABLEISH_LOG";

// Selectors used when the caller names none
pub const DEFAULT_ROW_SELECTOR: &str = "table tr";
pub const DEFAULT_CELL_SELECTOR: &str = "td, th";

// Span attributes
pub const ROWSPAN_ATTR: &str = "rowspan";
pub const COLSPAN_ATTR: &str = "colspan";
// Same upper bounds as the HTML table model; anything above is malformed
pub const MAX_COLSPAN: usize = 1_000;
pub const MAX_ROWSPAN: usize = 65_534;

// Input
pub const STDIN_MARKER: &str = "-";
