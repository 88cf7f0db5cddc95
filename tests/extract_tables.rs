// tests/extract_tables.rs
//
// End-to-end extraction from HTML source.
//
use scraper::{Html, Selector};

use tableish::{
    extract_from_document, extract_table, next_element_sibling, Cell, ColumnSelector,
    RowSelector, SelectorKind, TableError,
};

fn assert_rectangular(grid: &[Vec<String>]) {
    if let Some(first) = grid.first() {
        assert!(grid.iter().all(|r| r.len() == first.len()), "ragged grid: {grid:?}");
    }
}

#[test]
fn simple_table_is_copied_cell_for_cell() {
    let html = r#"
        <table id="tools">
          <tr><td>tool</td><td>dude</td></tr>
          <tr><td>  webrat
              </td><td>bryan</td></tr>
        </table>"#;
    let grid = extract_table(html, "table#tools tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["tool", "dude"], vec!["webrat", "bryan"]]);
}

#[test]
fn header_and_data_cells_keep_document_order() {
    let html = r#"
        <table>
          <tr><th>Name</th><th>Age</th></tr>
          <tr><th>Ann</th><td>31</td></tr>
        </table>"#;
    let grid = extract_table(html, "table tr", "td, th").unwrap();
    assert_eq!(grid, vec![vec!["Name", "Age"], vec!["Ann", "31"]]);
}

#[test]
fn colspan_in_first_row() {
    let html = r#"
        <table>
          <tr><td colspan="2">Totals</td></tr>
          <tr><td>a</td><td>b</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["Totals", ""], vec!["a", "b"]]);
}

#[test]
fn rowspan_in_first_column_shifts_next_row() {
    let html = r#"
        <table>
          <tr><td rowspan="2">Fruit</td><td>apple</td></tr>
          <tr><td>pear</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["Fruit", "apple"], vec!["", "pear"]]);
}

#[test]
fn mixed_spans_line_up_like_a_browser() {
    let html = r#"
        <table>
          <tr><th rowspan="3">Q1</th><th colspan="2">Sales</th><th>Notes</th></tr>
          <tr><td>10</td><td rowspan="2">20</td><td>ok</td></tr>
          <tr><td>11</td><td>late</td></tr>
          <tr><td>Q2</td><td>12</td><td>21</td><td></td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td, th").unwrap();
    assert_eq!(
        grid,
        vec![
            vec!["Q1", "Sales", "", "Notes"],
            vec!["", "10", "20", "ok"],
            vec!["", "11", "", "late"],
            vec!["Q2", "12", "21", ""],
        ]
    );
}

#[test]
fn definition_list_with_function_selectors() {
    let html = r#"
        <dl id="team">
          <dt>tool</dt>
          <dd>dude</dd>
          <dt>webrat</dt>
          <dd>bryan</dd>
        </dl>"#;
    let dt = Selector::parse("dl#team dt").unwrap();
    let rows = RowSelector::function(move |doc: &Html| doc.select(&dt).collect());
    let cells = ColumnSelector::function(|dt| {
        vec![Cell::Node(dt), next_element_sibling(dt).into()]
    });

    let grid = extract_table(html, rows, cells).unwrap();
    assert_eq!(grid, vec![vec!["tool", "dude"], vec!["webrat", "bryan"]]);
}

#[test]
fn function_cells_may_be_text_or_missing() {
    let html = "<ul><li>one</li><li>two</li></ul>";
    let cells = ColumnSelector::function(|li| {
        let text: String = li.text().collect();
        if text == "one" {
            vec![Cell::Text(format!("  {text}!  ")), Cell::Empty]
        } else {
            vec![Cell::Node(li)]
        }
    });
    let grid = extract_table(html, "li", cells).unwrap();
    assert_eq!(grid, vec![vec!["one!", ""], vec!["two", ""]]);
}

#[test]
fn no_matching_rows_gives_empty_grid() {
    let grid = extract_table("<p>nothing tabular</p>", "table tr", "td").unwrap();
    assert!(grid.is_empty());
}

#[test]
fn rows_without_cells_are_padded() {
    let html = r#"
        <table>
          <tr><td>a</td><td>b</td><td>c</td></tr>
          <tr class="spacer"></tr>
          <tr><td>d</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(
        grid,
        vec![vec!["a", "b", "c"], vec!["", "", ""], vec!["d", "", ""]]
    );
}

#[test]
fn malformed_spans_count_as_one() {
    let html = r#"
        <table>
          <tr><td colspan="abc">x</td><td rowspan="0">y</td><td colspan="-3">z</td></tr>
          <tr><td>1</td><td>2</td><td>3</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["x", "y", "z"], vec!["1", "2", "3"]]);
}

#[test]
fn trimming_keeps_interior_whitespace() {
    let html = "<table><tr><td>\n\t  New   York \n</td></tr></table>";
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["New   York"]]);
}

#[test]
fn nested_markup_contributes_text() {
    let html = r#"<table><tr><td><a href="/x">web<b>rat</b></a> <em>1.0</em></td></tr></table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["webrat 1.0"]]);
}

#[test]
fn invalid_selectors_fail_before_traversal() {
    let err = extract_table("<table></table>", "tr[", "td").unwrap_err();
    match err {
        TableError::InvalidSelector { kind, selector, .. } => {
            assert_eq!(kind, SelectorKind::Row);
            assert_eq!(selector, "tr[");
        }
    }

    let err = extract_table("<table></table>", "tr", "").unwrap_err();
    assert!(matches!(err, TableError::InvalidSelector { kind: SelectorKind::Column, .. }));
    assert!(err.to_string().starts_with("invalid column selector"));
}

#[test]
fn parsed_document_can_be_reused() {
    let doc = Html::parse_document(
        "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>",
    );
    let rows = RowSelector::query("tr");
    let first = extract_from_document(&doc, &rows, &ColumnSelector::query("td:first-child")).unwrap();
    let all = extract_from_document(&doc, &rows, &ColumnSelector::query("td")).unwrap();
    assert_eq!(first, vec![vec!["a"], vec!["c"]]);
    assert_eq!(all, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn span_rectangle_is_fully_reserved() {
    let html = r#"
        <table>
          <tr><td>a</td><td rowspan="2" colspan="2">big</td><td>b</td></tr>
          <tr><td>c</td><td>d</td></tr>
          <tr><td>e</td><td>f</td><td>g</td><td>h</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_rectangular(&grid);
    assert_eq!(grid[0], vec!["a", "big", "", "b"]);
    assert_eq!(grid[1], vec!["c", "", "", "d"]);
    assert_eq!(grid[2], vec!["e", "f", "g", "h"]);
}

#[test]
fn irregular_tables_are_always_rectangular() {
    let html = r#"
        <table>
          <tr><td rowspan="4">x</td></tr>
          <tr><td colspan="5">wide</td></tr>
          <tr></tr>
          <tr><td>1</td><td>2</td></tr>
          <tr><td colspan="2">tail</td><td rowspan="9">drip</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid.len(), 5);
    assert_rectangular(&grid);
    assert_eq!(grid[0].len(), 6);
    assert_eq!(grid[1], vec!["", "wide", "", "", "", ""]);
}

#[test]
fn span_reads_leading_digits_like_a_browser() {
    let html = r#"<table><tr><td colspan="2x">a</td><td>z</td></tr></table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["a", "", "z"]]);
}

#[test]
fn spans_above_table_limits_count_as_one() {
    let html = r#"
        <table>
          <tr><td colspan="1001">wide</td><td rowspan="65535">tall</td></tr>
          <tr><td>a</td><td>b</td></tr>
        </table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["wide", "tall"], vec!["a", "b"]]);
}

#[test]
fn largest_allowed_span_stays_within_the_matched_rows() {
    let html = r#"<table><tr><td rowspan="65534" colspan="1000">x</td></tr></table>"#;
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].len(), 1000);
    assert_eq!(grid[0][0], "x");
    assert!(grid[0][1..].iter().all(String::is_empty));

    // Every row opens another maximal span; the grid still only covers the rows given
    let rows = r#"<tr><td rowspan="65534" colspan="1000">x</td></tr>"#.repeat(4);
    let grid = extract_table(&format!("<table>{rows}</table>"), "tr", "td").unwrap();
    assert_eq!(grid.len(), 4);
    assert_rectangular(&grid);
    assert_eq!(grid[3][3000], "x");
    assert_eq!(grid[3].len(), 4000);
}

#[test]
fn nbsp_only_cell_is_empty() {
    let html = "<table><tr><td>&nbsp;</td><td>&nbsp;a&nbsp;b&nbsp;</td></tr></table>";
    let grid = extract_table(html, "tr", "td").unwrap();
    assert_eq!(grid, vec![vec!["", "a\u{a0}b"]]);
}
