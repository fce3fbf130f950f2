//! Single-pass character classifier.
//!
//! Each row is scanned left to right on its own; there is no state carried
//! between rows and no notion of multi-character tokens. For every character
//! the first matching rule wins:
//!
//! 1. `#` tags itself and the rest of the row as `Comment` and ends the scan
//! 2. whitespace is `Body`
//! 3. an ASCII decimal digit is `Number`
//! 4. an alphabetic character or `_` is `Variable`
//! 5. anything else is `Operator`
//!
//! So `count123` is `Variable` then `Number` per character, and the `.` in
//! `3.14` is an `Operator`.

use crate::document::{Document, Overlay};
use crate::row::Row;
use crate::tag::Tag;
use std::ops::Range;

/// Character that starts a comment running to the end of the row
pub const COMMENT_INTRODUCER: char = '#';

/// Classify a single character (rules 2 to 5)
pub fn classify_char(ch: char) -> Tag {
    if ch.is_whitespace() {
        Tag::Body
    } else if ch.is_ascii_digit() {
        Tag::Number
    } else if ch.is_alphabetic() || ch == '_' {
        Tag::Variable
    } else {
        Tag::Operator
    }
}

/// Fresh tags for a sequence of characters
pub fn classify_chars<I>(chars: I) -> Vec<Tag>
where
    I: IntoIterator<Item = char>,
{
    let chars = chars.into_iter();
    let mut tags = Vec::with_capacity(chars.size_hint().0);
    let mut in_comment = false;
    for ch in chars {
        if !in_comment && ch == COMMENT_INTRODUCER {
            in_comment = true;
        }
        tags.push(if in_comment {
            Tag::Comment
        } else {
            classify_char(ch)
        });
    }
    tags
}

pub fn classify_row(row: &Row) -> Vec<Tag> {
    classify_chars(row.chars())
}

/// Compute a replacement overlay for the whole document
pub fn highlight(doc: &Document) -> Overlay {
    doc.rows().iter().map(classify_row).collect()
}

/// Re-classify every row in place
pub fn rehighlight(doc: &mut Document) {
    let overlay = highlight(doc);
    // The overlay was derived from this document, so its shape always matches.
    if let Err(e) = doc.apply_overlay(&overlay) {
        tracing::error!("Highlight pass produced a mismatched overlay: {}", e);
    }
}

/// Re-classify only `rows` (clipped to the document)
pub fn rehighlight_rows(doc: &mut Document, rows: Range<usize>) {
    let end = rows.end.min(doc.row_count());
    for idx in rows.start..end {
        let tags = match doc.row(idx) {
            Some(row) => classify_row(row),
            None => continue,
        };
        if let Err(e) = doc.set_row_tags(idx, &tags) {
            tracing::error!("Failed to retag row {}: {}", idx, e);
        }
    }
}
