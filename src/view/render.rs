//! Terminal painting for the editor screen.
//!
//! The screen is split top to bottom into a one-row header, the document
//! body, a one-row status line and a one-row footer. Only the body scrolls.

use crate::editor::Editor;
use crate::viewport::{Frame as ViewFrame, FrameRow};
use crate::view::theme::Theme;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Rows taken by the header, status line and footer
pub const CHROME_ROWS: u16 = 3;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl EditorLayout {
    pub fn new(area: Rect) -> Self {
        let [header, body, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            header,
            body,
            status,
            footer,
        }
    }

    /// (visible_rows, visible_cols) of the document body
    pub fn body_size(&self) -> (usize, usize) {
        (self.body.height as usize, self.body.width as usize)
    }
}

/// Scroll the editor to its cursor and paint the whole screen
pub fn render_editor(frame: &mut Frame, editor: &mut Editor, theme: &Theme) {
    let layout = EditorLayout::new(frame.area());
    let (visible_rows, visible_cols) = layout.body_size();
    let view = editor.refresh_view(visible_rows, visible_cols);

    render_bar(frame, layout.header, &editor.header_text(), theme.header_style());
    render_body(frame, layout.body, &view, theme);
    render_bar(
        frame,
        layout.status,
        editor.status().unwrap_or_default(),
        theme.status_style(),
    );
    render_bar(frame, layout.footer, editor.footer_text(), theme.footer_style());

    if let Some((row, col)) = editor.cursor_on_screen(visible_rows, visible_cols) {
        frame.set_cursor_position((layout.body.x + col as u16, layout.body.y + row as u16));
    }
}

/// A full-width bar; the style fills the remainder of the row
fn render_bar(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(text.to_string()).style(style), area);
}

fn render_body(frame: &mut Frame, area: Rect, view: &ViewFrame, theme: &Theme) {
    let lines: Vec<Line<'static>> = view.rows.iter().map(|row| row_line(row, theme)).collect();
    let paragraph = Paragraph::new(lines).style(theme.tag_style(crate::tag::Tag::Body));
    frame.render_widget(paragraph, area);
}

/// One styled span per run of equally tagged characters
fn row_line(row: &FrameRow, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    let mut cells = row.cells.iter().peekable();
    while let Some(first) = cells.next() {
        let mut text = String::from(first.ch);
        while let Some(next) = cells.next_if(|c| c.tag == first.tag) {
            text.push(next.ch);
        }
        spans.push(Span::styled(text, theme.tag_style(first.tag)));
    }
    Line::from(spans)
}
