//! A single line of the document.
//!
//! Each character is stored together with its tag in one [`Cell`], so the
//! text and the overlay can never drift apart: every structural edit moves
//! whole cells.

use crate::tag::Tag;
use unicode_width::UnicodeWidthChar;

/// Distance between tab stops, in screen cells
pub const TAB_WIDTH: usize = 8;

/// Screen cells taken by `ch` when drawn at screen column `at`
pub fn char_width(ch: char, at: usize) -> usize {
    match ch {
        '\t' => TAB_WIDTH - at % TAB_WIDTH,
        ch if ch.is_control() => 1,
        ch => UnicodeWidthChar::width(ch).unwrap_or(0),
    }
}

/// One character of a row and its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tag: Tag,
}

impl Cell {
    pub fn new(ch: char, tag: Tag) -> Self {
        Self { ch, tag }
    }
}

/// A row of text with a position-aligned tag overlay.
///
/// Columns are character indices, not byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a row from text, every character tagged `Body`
    pub fn from_text(text: &str) -> Self {
        Self {
            cells: text.chars().map(|ch| Cell::new(ch, Tag::Body)).collect(),
        }
    }

    /// Number of characters (and tags) in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The row's text as an owned string
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|cell| cell.ch)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.cells.iter().map(|cell| cell.tag)
    }

    /// Clamp a column to `[0, len]`
    pub fn clamp_col(&self, col: usize) -> usize {
        col.min(self.cells.len())
    }

    /// Insert `ch` at `col` (clamped). The new cell takes the tag of its left
    /// neighbour, or `Body` at column 0, until the next highlight pass.
    ///
    /// Returns the column the character landed at.
    pub fn insert(&mut self, col: usize, ch: char) -> usize {
        let col = self.clamp_col(col);
        let tag = match col {
            0 => Tag::Body,
            _ => self.cells[col - 1].tag,
        };
        self.cells.insert(col, Cell::new(ch, tag));
        col
    }

    /// Remove the character immediately before `col` (clamped).
    /// Returns `None` at column 0.
    pub fn remove_before(&mut self, col: usize) -> Option<Cell> {
        let col = self.clamp_col(col);
        if col == 0 {
            return None;
        }
        Some(self.cells.remove(col - 1))
    }

    /// Split at `col` (clamped); `self` keeps `[0, col)` and the returned row
    /// holds `[col, len)`, tags included.
    pub fn split_off(&mut self, col: usize) -> Row {
        let col = self.clamp_col(col);
        Row {
            cells: self.cells.split_off(col),
        }
    }

    /// Move all cells of `other` onto the end of this row
    pub fn append(&mut self, mut other: Row) {
        self.cells.append(&mut other.cells);
    }

    /// Replace the overlay with `tags`.
    ///
    /// Returns false and leaves the row untouched when `tags` has a different
    /// length than the row.
    pub fn set_tags(&mut self, tags: &[Tag]) -> bool {
        if tags.len() != self.cells.len() {
            return false;
        }
        for (cell, &tag) in self.cells.iter_mut().zip(tags) {
            cell.tag = tag;
        }
        true
    }

    /// Screen column where character `col` starts. Columns past the end
    /// count one cell each.
    pub fn display_col(&self, col: usize) -> usize {
        let end = self.clamp_col(col);
        let at = self.cells[..end]
            .iter()
            .fold(0, |at, cell| at + char_width(cell.ch, at));
        at + (col - end)
    }

    /// Screen cells the cursor covers when it sits on `col`: the width of the
    /// character there, at least 1, or 1 past the end of the row
    pub fn cursor_width(&self, col: usize) -> usize {
        match self.cells.get(col) {
            Some(cell) => char_width(cell.ch, self.display_col(col)).max(1),
            None => 1,
        }
    }

    /// Cells to draw for at most `width` screen columns starting at character
    /// `start` (clamped). Tabs become spaces up to the next tab stop and other
    /// control characters show as `?`. A character that would cross the right
    /// edge is left out along with everything after it.
    pub fn display_window(&self, start: usize, width: usize) -> Vec<Cell> {
        let start = self.clamp_col(start);
        let origin = self.display_col(start);
        let mut at = origin;
        let mut out = Vec::new();
        for cell in &self.cells[start..] {
            let w = char_width(cell.ch, at);
            if at + w - origin > width {
                break;
            }
            match cell.ch {
                '\t' => out.extend(std::iter::repeat(Cell::new(' ', cell.tag)).take(w)),
                ch if ch.is_control() => out.push(Cell::new('?', cell.tag)),
                _ => out.push(*cell),
            }
            at += w;
        }
        out
    }
}
