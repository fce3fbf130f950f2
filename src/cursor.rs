use crate::document::Document;

/// Cursor position as (row, column), both zero-based character indices.
///
/// The column is kept within `[0, len(row)]` by every movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pull the cursor back inside the document
    pub fn clamp(&mut self, doc: &Document) {
        self.row = self.row.min(doc.row_count() - 1);
        self.col = self.col.min(doc.row_len(self.row));
    }

    pub fn move_up(&mut self, doc: &Document) {
        self.row = self.row.saturating_sub(1);
        self.clamp(doc);
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.row + 1 < doc.row_count() {
            self.row += 1;
        }
        self.clamp(doc);
    }

    /// Left, wrapping to the end of the previous row at column 0
    pub fn move_left(&mut self, doc: &Document) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = doc.row_len(self.row);
        }
    }

    /// Right, wrapping to the start of the next row at end of line
    pub fn move_right(&mut self, doc: &Document) {
        if self.col < doc.row_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < doc.row_count() {
            self.row += 1;
            self.col = 0;
        }
    }
}
