use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use toyedit::config::Config;

#[test]
fn test_save_writes_one_line_per_row() {
    let mut harness = EditorTestHarness::with_file_content(40, 8, "first\nsecond").unwrap();
    harness.type_text("> ").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    let saved = std::fs::read_to_string(harness.file_path()).unwrap();
    assert_eq!(saved, "> first\nsecond\n");
    assert_eq!(harness.screen_row(6), "File saved.");
    assert!(!harness.editor().is_modified());

    // The message goes away on the next key
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_row(6), "");
}

#[test]
fn test_save_failure_is_shown_and_edits_kept() {
    let mut harness = EditorTestHarness::with_file_content(60, 8, "data\n").unwrap();
    // Replace the file with a directory so it can't be opened for writing
    std::fs::remove_file(harness.file_path()).unwrap();
    std::fs::create_dir(harness.file_path()).unwrap();

    harness.type_text("!").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(harness.screen_row(6).starts_with("Save failed"));
    assert_eq!(harness.buffer_lines(), vec!["!data"]);
    assert!(harness.editor().is_modified());
}

#[test]
fn test_custom_footer_from_config() {
    let config = Config {
        footer_text: " custom footer".to_string(),
        ..Config::default()
    };
    let harness = EditorTestHarness::with_config(40, 8, "", config).unwrap();
    assert_eq!(harness.screen_row(7), " custom footer");
}
