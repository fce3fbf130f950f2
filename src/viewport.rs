//! Scroll anchor and visible-window projection.
//!
//! The viewport only moves when the cursor would leave the visible window,
//! and then by the smallest amount that brings it back: scrolling up puts the
//! cursor on the first visible row, scrolling down on the last. Columns follow
//! the same rule measured in screen cells, so a wide character or a tab under
//! the cursor is always drawn whole.

use crate::cursor::Cursor;
use crate::document::Document;
use crate::row::{char_width, Cell, Row};
use crate::tag::Tag;

/// Top-left anchor of the visible window into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    scroll_line: usize,
    scroll_col: usize,
}

/// One screen row of a [`Frame`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRow {
    pub cells: Vec<Cell>,
}

impl FrameRow {
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.cells.iter().map(|cell| cell.tag).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The clipped, tagged slice of the document handed to the renderer.
/// Always holds exactly `visible_rows` rows; rows past the end of the
/// document are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<FrameRow>,
}

impl Frame {
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(FrameRow::text).collect()
    }
}

/// New anchor for one axis so that `pos` falls within `[anchor, anchor + extent)`
fn reveal(anchor: usize, pos: usize, extent: usize) -> usize {
    // A zero-sized window behaves like a single cell
    let extent = extent.max(1);
    if pos < anchor {
        pos
    } else if pos >= anchor + extent {
        pos + 1 - extent
    } else {
        anchor
    }
}

/// New horizontal anchor (a character index) so the cell under `col` fits in
/// `extent` screen columns. Without a row every column is one cell wide.
fn reveal_col(row: Option<&Row>, anchor: usize, col: usize, extent: usize) -> usize {
    let Some(row) = row else {
        return reveal(anchor, col, extent);
    };
    if col < anchor {
        return col;
    }
    let extent = extent.max(1);
    let cursor_end = row.display_col(col) + row.cursor_width(col);
    let mut anchor = anchor;
    let mut left = row.display_col(anchor);
    while anchor < col && cursor_end - left > extent {
        left += row.cells().get(anchor).map_or(1, |cell| char_width(cell.ch, left));
        anchor += 1;
    }
    anchor
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scroll(scroll_line: usize, scroll_col: usize) -> Self {
        Self {
            scroll_line,
            scroll_col,
        }
    }

    pub fn scroll_line(&self) -> usize {
        self.scroll_line
    }

    pub fn scroll_col(&self) -> usize {
        self.scroll_col
    }

    /// Scroll the minimum needed to keep `cursor` inside a window of
    /// `visible_rows` x `visible_cols` screen cells.
    pub fn scroll_to_cursor(
        &mut self,
        doc: &Document,
        cursor: Cursor,
        visible_rows: usize,
        visible_cols: usize,
    ) {
        let line = reveal(self.scroll_line, cursor.row, visible_rows);
        let col = reveal_col(doc.row(cursor.row), self.scroll_col, cursor.col, visible_cols);
        if line != self.scroll_line || col != self.scroll_col {
            tracing::debug!(
                "viewport scroll: ({}, {}) -> ({}, {}) for cursor {:?}, window {}x{}",
                self.scroll_line,
                self.scroll_col,
                line,
                col,
                cursor,
                visible_rows,
                visible_cols
            );
        }
        self.scroll_line = line;
        self.scroll_col = col;
    }

    /// Project the visible window of `doc`
    pub fn produce_frame(&self, doc: &Document, visible_rows: usize, visible_cols: usize) -> Frame {
        let rows = (0..visible_rows)
            .map(|i| match doc.row(self.scroll_line + i) {
                Some(row) => FrameRow {
                    cells: row.display_window(self.scroll_col, visible_cols),
                },
                None => FrameRow::default(),
            })
            .collect();
        Frame { rows }
    }

    /// Screen position (row, col) of `cursor` relative to the window origin,
    /// or `None` when it lies outside the window. The column is in screen
    /// cells.
    pub fn cursor_on_screen(
        &self,
        doc: &Document,
        cursor: Cursor,
        visible_rows: usize,
        visible_cols: usize,
    ) -> Option<(usize, usize)> {
        let row = cursor.row.checked_sub(self.scroll_line)?;
        let col = match doc.row(cursor.row) {
            Some(line) if cursor.col >= self.scroll_col => {
                line.display_col(cursor.col) - line.display_col(self.scroll_col)
            }
            _ => cursor.col.checked_sub(self.scroll_col)?,
        };
        (row < visible_rows && col < visible_cols).then_some((row, col))
    }
}
