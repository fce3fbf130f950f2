use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("line {i}\n")).collect()
}

/// 13 rows of terminal leave 10 rows of body
#[test]
fn test_scroll_down_then_back_up() {
    let mut harness = EditorTestHarness::with_file_content(40, 13, &numbered_lines(30)).unwrap();

    for _ in 0..15 {
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    }
    assert_eq!(harness.editor().viewport().scroll_line(), 6);
    assert_eq!(harness.screen_row(1), "line 6");
    assert_eq!(harness.screen_row(10), "line 15");
    assert_eq!(harness.screen_cursor(), (0, 10));

    for _ in 0..12 {
        harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    }
    assert_eq!(harness.editor().viewport().scroll_line(), 3);
    assert_eq!(harness.screen_row(1), "line 3");
    assert_eq!(harness.screen_cursor(), (0, 1));
}

#[test]
fn test_horizontal_scroll_for_long_line() {
    let long = "abcdefghijklmnopqrstuvwxyz";
    let mut harness = EditorTestHarness::with_file_content(10, 6, long).unwrap();

    for _ in 0..12 {
        harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    }
    assert_eq!(harness.editor().viewport().scroll_col(), 3);
    assert_eq!(harness.screen_row(1), "defghijklm");
    assert_eq!(harness.screen_cursor(), (9, 1));
}

#[test]
fn test_rows_past_end_are_blank() {
    let harness = EditorTestHarness::with_file_content(20, 8, "only\n").unwrap();
    assert_eq!(harness.screen_row(1), "only");
    for y in 2..6 {
        assert_eq!(harness.screen_row(y), "");
    }

    let screen = harness.screen_to_string();
    assert_eq!(screen.lines().count(), 8);
    assert!(screen.contains("\nonly\n\n\n\n\n"));
}
