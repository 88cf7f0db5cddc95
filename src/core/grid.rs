// src/core/grid.rs
//! Grid assembly.
//!
//! Rows are laid down one at a time. Each cell takes the first free column
//! of the current row and reserves a `colspan × rowspan` rectangle; slots
//! reserved by a span from an earlier row are skipped, so later rows stay
//! aligned the way a browser lays the table out.

/// Rectangular table of cell text, one inner `Vec` per row.
pub type Grid = Vec<Vec<String>>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Slot {
    /// Never written. Becomes `""` when the grid is finished.
    #[default]
    Vacant,
    /// Covered by a span whose value lives at the span origin.
    Spanned,
    Filled(String),
}

impl Slot {
    fn is_vacant(&self) -> bool {
        matches!(self, Slot::Vacant)
    }

    fn into_text(self) -> String {
        match self {
            Slot::Filled(text) => text,
            Slot::Vacant | Slot::Spanned => s!(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GridBuilder {
    slots: Vec<Vec<Slot>>,
    // Per row: every column left of the cursor is occupied
    cursors: Vec<usize>,
    // Rows actually started
    row_count: usize,
    // Rows the grid will have; spans never reserve past this
    row_limit: usize,
}

impl GridBuilder {
    /// Builder for a grid of `rows` rows. Rowspans are clipped to that
    /// height, so memory stays proportional to what is actually emitted.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            slots: Vec::with_capacity(rows),
            cursors: Vec::with_capacity(rows),
            row_count: 0,
            row_limit: rows,
        }
    }

    /// Start the next row. Returns its index.
    pub fn begin_row(&mut self) -> usize {
        let row = self.row_count;
        self.row_count += 1;
        self.row_limit = self.row_limit.max(self.row_count);
        self.ensure_rows(self.row_count);
        row
    }

    /// Place a cell in the current row at its first free column and return
    /// that column. Spans below 1 are treated as 1; a rowspan reaching past
    /// the last row is cut at the last row. Starts the first row if none
    /// has been started yet.
    pub fn place(&mut self, value: String, rowspan: usize, colspan: usize) -> usize {
        if self.row_count == 0 {
            self.begin_row();
        }
        let row = self.row_count - 1;
        let rowspan = rowspan.clamp(1, self.row_limit - row);
        let colspan = colspan.max(1);

        let col = self.next_free(row);
        self.ensure_rows(row + rowspan);

        for slots in &mut self.slots[row..row + rowspan] {
            if slots.len() < col + colspan {
                slots.resize(col + colspan, Slot::Vacant);
            }
            // Overlapping spans are malformed markup; first writer keeps the slot
            for slot in &mut slots[col..col + colspan] {
                if slot.is_vacant() {
                    *slot = Slot::Spanned;
                }
            }
        }
        self.slots[row][col] = Slot::Filled(value);
        col
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Pad every row to the widest extent and turn placeholders into `""`.
    pub fn finish(self) -> Grid {
        let Self { mut slots, row_count, .. } = self;
        slots.truncate(row_count);

        let width = slots.iter().map(Vec::len).max().unwrap_or(0);
        logd!("grid assembled: {row_count} rows x {width} columns");

        slots
            .into_iter()
            .map(|row| {
                let mut out: Vec<String> = row.into_iter().map(Slot::into_text).collect();
                out.resize(width, s!());
                out
            })
            .collect()
    }

    fn ensure_rows(&mut self, n: usize) {
        if self.slots.len() < n {
            self.slots.resize_with(n, Vec::new);
            self.cursors.resize(n, 0);
        }
    }

    fn next_free(&mut self, row: usize) -> usize {
        let slots = &self.slots[row];
        let mut col = self.cursors[row];
        while slots.get(col).is_some_and(|s| !s.is_vacant()) {
            col += 1;
        }
        self.cursors[row] = col;
        col
    }
}
