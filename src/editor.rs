//! Editing session: the document, cursor and viewport for one open file.
//!
//! Each input is handled to completion in a fixed order: mutate the
//! document, re-highlight, then (when the caller asks for a frame) scroll the
//! viewport and project it.

use crate::config::Config;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::Result;
use crate::file_io;
use crate::highlight;
use crate::input::Action;
use crate::viewport::{Frame, Viewport};
use std::ops::Range;
use std::path::{Path, PathBuf};

pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    path: PathBuf,
    config: Config,
    /// Unsaved edits since load or the last successful save
    modified: bool,
    /// One-shot message for the status line, cleared by the next action
    status: Option<String>,
    quit_requested: bool,
}

impl Editor {
    /// Open `path`. An unreadable file starts an empty document.
    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Self {
        let path = path.as_ref();
        let document = Document::from_lines(file_io::load_lines(path));
        Self::with_document(path, document, config)
    }

    pub fn with_document<P: AsRef<Path>>(path: P, mut document: Document, config: Config) -> Self {
        highlight::rehighlight(&mut document);
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(),
            path: path.as_ref().to_path_buf(),
            config,
            modified: false,
            status: None,
            quit_requested: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn header_text(&self) -> String {
        let marker = if self.modified { " [+]" } else { "" };
        format!(" File: {}{}", self.path.display(), marker)
    }

    pub fn footer_text(&self) -> &str {
        &self.config.footer_text
    }

    /// Apply one action to completion
    pub fn handle(&mut self, action: Action) -> Result<()> {
        self.status = None;
        tracing::trace!("action {:?} at {:?}", action, self.cursor);

        match action {
            Action::Quit => {
                self.quit_requested = true;
                Ok(())
            }
            Action::Save => self.save(),
            Action::MoveUp => {
                self.cursor.move_up(&self.document);
                Ok(())
            }
            Action::MoveDown => {
                self.cursor.move_down(&self.document);
                Ok(())
            }
            Action::MoveLeft => {
                self.cursor.move_left(&self.document);
                Ok(())
            }
            Action::MoveRight => {
                self.cursor.move_right(&self.document);
                Ok(())
            }
            Action::InsertChar(_) | Action::SplitLine | Action::Backspace => {
                if let Some(touched) = self.apply_edit(action)? {
                    self.modified = true;
                    self.rehighlight(touched);
                }
                Ok(())
            }
        }
    }

    /// Perform a structural edit at the cursor. Returns the rows whose text
    /// changed, or `None` when nothing changed.
    fn apply_edit(&mut self, action: Action) -> Result<Option<Range<usize>>> {
        let Cursor { row, col } = self.cursor;
        let touched = match action {
            Action::InsertChar(ch) => {
                let at = self.document.insert_char(row, col, ch)?;
                self.cursor.col = at + 1;
                Some(row..row + 1)
            }
            Action::SplitLine => {
                let new_row = self.document.split_row(row, col)?;
                self.cursor = Cursor::new(new_row, 0);
                Some(row..new_row + 1)
            }
            Action::Backspace if col > 0 => {
                let removed = self.document.delete_char(row, col)?;
                removed.map(|_| {
                    self.cursor.col = col - 1;
                    row..row + 1
                })
            }
            Action::Backspace if row > 0 => {
                let join_col = self.document.join_with_previous(row)?;
                self.cursor = Cursor::new(row - 1, join_col);
                Some(row - 1..row)
            }
            _ => None,
        };
        self.cursor.clamp(&self.document);
        Ok(touched)
    }

    fn rehighlight(&mut self, touched: Range<usize>) {
        if self.config.incremental_highlight {
            highlight::rehighlight_rows(&mut self.document, touched);
        } else {
            highlight::rehighlight(&mut self.document);
        }
    }

    /// Write the document to its path. On failure the error is shown in the
    /// status line and returned; the document is left untouched.
    pub fn save(&mut self) -> Result<()> {
        match file_io::save_lines(&self.path, &self.document.to_lines()) {
            Ok(()) => {
                self.modified = false;
                self.set_status("File saved.");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                self.set_status(format!("Save failed: {}", e));
                Err(e)
            }
        }
    }

    /// Scroll to keep the cursor visible and project the visible window
    pub fn refresh_view(&mut self, visible_rows: usize, visible_cols: usize) -> Frame {
        self.viewport
            .scroll_to_cursor(&self.document, self.cursor, visible_rows, visible_cols);
        self.viewport
            .produce_frame(&self.document, visible_rows, visible_cols)
    }

    /// Cursor position within the last projected window, in screen cells
    pub fn cursor_on_screen(&self, visible_rows: usize, visible_cols: usize) -> Option<(usize, usize)> {
        self.viewport
            .cursor_on_screen(&self.document, self.cursor, visible_rows, visible_cols)
    }
}
