//! Row-oriented document store.
//!
//! A [`Document`] owns an ordered, never-empty list of [`Row`]s. All structural
//! edits (insert, delete, split, join) go through the methods here; rows are
//! addressed by index and shift up or down as rows are added or removed.
//! Out-of-range rows are rejected with a typed error, out-of-range columns are
//! clamped.

use crate::error::{EditorError, Result};
use crate::row::Row;
use crate::tag::Tag;

/// Replacement tags for every row of a document, as produced by the highlighter
pub type Overlay = Vec<Vec<Tag>>;

/// The full ordered collection of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    /// A document holding a single empty row
    pub fn new() -> Self {
        Self {
            rows: vec![Row::new()],
        }
    }

    /// Build a document from lines of text; see [`Document::load_from_lines`]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut doc = Self::new();
        doc.load_from_lines(lines);
        doc
    }

    /// Replace the whole document. Every line becomes a row tagged `Body`;
    /// an empty input yields a single empty row.
    pub fn load_from_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rows = lines
            .into_iter()
            .map(|line| Row::from_text(line.as_ref()))
            .collect();
        if self.rows.is_empty() {
            self.rows.push(Row::new());
        }
        tracing::debug!("Loaded document with {} rows", self.rows.len());
    }

    /// Row texts in order, suitable for persistence
    pub fn to_lines(&self) -> Vec<String> {
        self.rows.iter().map(Row::text).collect()
    }

    /// Number of rows, always at least 1
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Length in characters of `row`, or 0 when it doesn't exist
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Row::len)
    }

    fn row_mut(&mut self, row: usize) -> Result<&mut Row> {
        let row_count = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(EditorError::RowOutOfRange { row, row_count })
    }

    /// Insert `ch` into `row` at `col`; `col` is clamped to the row length.
    /// Returns the column the character was placed at.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<usize> {
        let col = self.row_mut(row)?.insert(col, ch);
        tracing::trace!("insert {:?} at {}:{}", ch, row, col);
        Ok(col)
    }

    /// Backspace: delete the character before `col`. Does nothing at column 0;
    /// merging across rows is [`Document::join_with_previous`].
    ///
    /// Returns the removed character, if any.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Result<Option<char>> {
        let removed = self.row_mut(row)?.remove_before(col).map(|cell| cell.ch);
        tracing::trace!("delete before {}:{} -> {:?}", row, col, removed);
        Ok(removed)
    }

    /// Split `row` at `col` (clamped). The right half becomes a new row right
    /// after `row`; its index is returned.
    pub fn split_row(&mut self, row: usize, col: usize) -> Result<usize> {
        let right = self.row_mut(row)?.split_off(col);
        self.rows.insert(row + 1, right);
        tracing::trace!("split row {} at {}", row, col);
        Ok(row + 1)
    }

    /// Append `row` onto `row - 1` and remove it. Returns the column where the
    /// two halves meet (the old length of `row - 1`).
    pub fn join_with_previous(&mut self, row: usize) -> Result<usize> {
        if row >= self.rows.len() {
            return Err(EditorError::RowOutOfRange {
                row,
                row_count: self.rows.len(),
            });
        }
        if row == 0 {
            return Err(EditorError::NoPreviousRow { row });
        }
        let tail = self.rows.remove(row);
        let prev = &mut self.rows[row - 1];
        let join_col = prev.len();
        prev.append(tail);
        tracing::trace!("joined row {} onto {} at {}", row, row - 1, join_col);
        Ok(join_col)
    }

    /// Replace every row's tags with `overlay`.
    ///
    /// The overlay must have one entry per row and one tag per character;
    /// otherwise nothing is changed and `OverlayMismatch` names the first bad row.
    pub fn apply_overlay(&mut self, overlay: &[Vec<Tag>]) -> Result<()> {
        if overlay.len() != self.rows.len() {
            return Err(EditorError::OverlayMismatch {
                row: overlay.len().min(self.rows.len()),
            });
        }
        if let Some(row) = self
            .rows
            .iter()
            .zip(overlay)
            .position(|(row, tags)| row.len() != tags.len())
        {
            return Err(EditorError::OverlayMismatch { row });
        }
        for (row, tags) in self.rows.iter_mut().zip(overlay) {
            row.set_tags(tags);
        }
        Ok(())
    }

    /// Replace the tags of a single row
    pub fn set_row_tags(&mut self, row: usize, tags: &[Tag]) -> Result<()> {
        if self.row_mut(row)?.set_tags(tags) {
            Ok(())
        } else {
            Err(EditorError::OverlayMismatch { row })
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
