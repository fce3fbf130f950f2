//! Editor actions and their key bindings.
//!
//! One key event maps to at most one [`Action`]; the edit loop applies it
//! completely before reading the next event.

/// A single discrete editing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertChar(char),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Break the row at the cursor
    SplitLine,
    /// Delete before the cursor, joining rows at column 0
    Backspace,
    Save,
    Quit,
}

#[cfg(feature = "runtime")]
mod keys {
    use super::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    impl Action {
        /// Translate a terminal key event. Unbound keys yield `None`.
        pub fn from_key_event(event: &KeyEvent) -> Option<Action> {
            if event.kind == KeyEventKind::Release {
                return None;
            }
            let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
            match event.code {
                KeyCode::Char('q') if ctrl => Some(Action::Quit),
                KeyCode::Char('s') if ctrl => Some(Action::Save),
                KeyCode::Char(_) if ctrl || event.modifiers.contains(KeyModifiers::ALT) => None,
                KeyCode::Char(ch) if !ch.is_control() => Some(Action::InsertChar(ch)),
                KeyCode::Up => Some(Action::MoveUp),
                KeyCode::Down => Some(Action::MoveDown),
                KeyCode::Left => Some(Action::MoveLeft),
                KeyCode::Right => Some(Action::MoveRight),
                KeyCode::Enter => Some(Action::SplitLine),
                KeyCode::Backspace => Some(Action::Backspace),
                _ => None,
            }
        }
    }

}
