// src/extract.rs
use scraper::Html;

use crate::core::{
    grid::{Grid, GridBuilder},
    selector::{ColumnSelector, CompiledColumnSelector, CompiledRowSelector, RowSelector},
    TableError,
};

/// Parse `html_source` and pull a rectangular grid of cell text out of it.
///
/// `rows` picks the row elements, `cells` the cells of each row; both take
/// CSS text (`"table tr"`, `"td, th"`) or a function selector.
/// `rowspan`/`colspan` are honoured: the span origin carries the text and
/// every other covered slot is `""`. All rows come back the same length.
pub fn extract_table<'f>(
    html_source: &str,
    rows: impl Into<RowSelector<'f>>,
    cells: impl Into<ColumnSelector<'f>>,
) -> Result<Grid, TableError> {
    let rows = rows.into();
    let cells = cells.into();
    // Compiled before parsing; a bad selector never costs a parse
    let row_sel = rows.compile()?;
    let cell_sel = cells.compile()?;

    let document = Html::parse_document(html_source);
    Ok(assemble(&document, &row_sel, &cell_sel))
}

/// Same as [`extract_table`] for an already parsed document.
pub fn extract_from_document(
    document: &Html,
    rows: &RowSelector<'_>,
    cells: &ColumnSelector<'_>,
) -> Result<Grid, TableError> {
    let row_sel = rows.compile()?;
    let cell_sel = cells.compile()?;
    Ok(assemble(document, &row_sel, &cell_sel))
}

fn assemble(
    document: &Html,
    rows: &CompiledRowSelector<'_, '_>,
    cells: &CompiledColumnSelector<'_, '_>,
) -> Grid {
    let matched = rows.rows(document);
    let mut builder = GridBuilder::with_rows(matched.len());
    for row in matched {
        builder.begin_row();
        for cell in cells.cells(row) {
            let (rowspan, colspan) = (cell.rowspan(), cell.colspan());
            builder.place(cell.value(), rowspan, colspan);
        }
    }
    logd!("matched {} rows", builder.row_count());
    builder.finish()
}
