use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Typing into a missing file starts from one empty row
#[test]
fn test_type_into_new_file() {
    let mut harness = EditorTestHarness::new(40, 8).unwrap();
    assert_eq!(harness.buffer_lines(), vec![""]);

    harness.type_text("x").unwrap();
    assert_eq!(harness.buffer_lines(), vec!["x"]);
    assert_eq!(harness.screen_row(1), "x");
    assert_eq!(harness.screen_cursor(), (1, 1));
}

#[test]
fn test_enter_splits_and_backspace_joins() {
    let mut harness = EditorTestHarness::with_file_content(40, 8, "hello world\n").unwrap();
    for _ in 0..5 {
        harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    }

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.buffer_lines(), vec!["hello", " world"]);
    assert_eq!(harness.screen_row(1), "hello");
    assert_eq!(harness.screen_row(2), " world");
    assert_eq!(harness.screen_cursor(), (0, 2));

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.buffer_lines(), vec!["hello world"]);
    assert_eq!(harness.screen_cursor(), (5, 1));

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.buffer_lines(), vec!["hell world"]);
}

#[test]
fn test_arrow_keys_wrap_between_rows() {
    let mut harness = EditorTestHarness::with_file_content(40, 8, "ab\ncd\n").unwrap();

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor(), (0, 1));

    for _ in 0..3 {
        harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    }
    assert_eq!(harness.screen_cursor(), (0, 2));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor(), (2, 1));
}

#[test]
fn test_highlight_colors_follow_edits() {
    let mut harness = EditorTestHarness::new(40, 8).unwrap();
    harness.type_text("a=1 #c").unwrap();

    assert_eq!(harness.fg_at(0, 1), Color::White);
    assert_eq!(harness.fg_at(1, 1), Color::Red);
    assert_eq!(harness.fg_at(2, 1), Color::Magenta);
    assert_eq!(harness.fg_at(4, 1), Color::Blue);
    assert_eq!(harness.fg_at(5, 1), Color::Blue);

    // Removing the '#' turns the comment back into code
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.buffer_lines(), vec!["a=1 c"]);
    assert_eq!(harness.fg_at(4, 1), Color::White);
}

#[test]
fn test_header_shows_file_and_modified_marker() {
    let mut harness = EditorTestHarness::with_file_content(200, 8, "x\n").unwrap();
    let path = harness.file_path().display().to_string();
    assert!(harness.screen_row(0).starts_with(&format!(" File: {}", path)));
    assert!(!harness.screen_row(0).ends_with("[+]"));

    harness.type_text("y").unwrap();
    assert!(harness.screen_row(0).ends_with("[+]"));
}

#[test]
fn test_quit_sets_flag() {
    let mut harness = EditorTestHarness::new(40, 8).unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.editor().should_quit());
    assert_eq!(harness.buffer_lines(), vec![""]);
}
