use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn press_right(harness: &mut EditorTestHarness, times: usize) {
    for _ in 0..times {
        harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    }
}

/// The terminal cursor lands after both double-width characters
#[test]
fn test_cursor_after_wide_chars() {
    let mut harness = EditorTestHarness::with_file_content(20, 6, "日本x").unwrap();
    press_right(&mut harness, 2);

    assert_eq!(harness.editor().cursor().col, 2);
    assert_eq!(harness.screen_row(1), "日 本 x");
    assert_eq!(harness.screen_cursor(), (4, 1));

    // Typing goes where the cursor is drawn
    harness.type_text("y").unwrap();
    assert_eq!(harness.buffer_lines(), vec!["日本yx"]);
    assert_eq!(harness.screen_cursor(), (5, 1));
}

/// In a narrow window the character under the cursor is scrolled fully into view
#[test]
fn test_narrow_window_scrolls_wide_chars_whole() {
    let mut harness = EditorTestHarness::with_file_content(4, 6, "日本日本x").unwrap();
    press_right(&mut harness, 3);

    assert_eq!(harness.editor().viewport().scroll_col(), 2);
    assert_eq!(harness.screen_row(1), "日 本");
    assert_eq!(harness.screen_cursor(), (2, 1));
}

/// Tabs are drawn as spaces up to the next stop
#[test]
fn test_tab_is_expanded() {
    let mut harness = EditorTestHarness::with_file_content(20, 6, "\tab").unwrap();
    assert_eq!(harness.screen_row(1), "        ab");
    assert_eq!(harness.screen_cursor(), (0, 1));

    press_right(&mut harness, 1);
    assert_eq!(harness.screen_cursor(), (8, 1));

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_row(1), "ab");
    assert_eq!(harness.screen_cursor(), (0, 1));
}
