//! Typed input actions and the crossterm key-event translator.
//!
//! The REPL's testable surface is [`Action`], not raw bytes: everything from
//! here down reacts only to the parsed action and the `Unknown` sentinel,
//! which suppresses a render rather than triggering one.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InsertCodepoint(char),
    Newline,
    Backspace,
    DeleteForward,
    Left,
    Right,
    Up,
    Down,
    Submit,
    Quit,
    Resize(u16, u16),
    Unknown,
}

/// Translate a single crossterm [`Event`] into an [`Action`].
///
/// Key-release/repeat events on platforms that report them are folded into
/// `Unknown` here (only `Press` drives an action) so holding a key down on
/// Windows does not insert duplicate characters.
pub fn translate(event: &Event) -> Action {
    match event {
        Event::Resize(cols, rows) => Action::Resize(*cols, *rows),
        Event::Key(key) => translate_key(key),
        _ => Action::Unknown,
    }
}

fn translate_key(key: &KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Unknown;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) => Action::InsertCodepoint(c),
        KeyCode::Enter => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::Newline
            } else {
                Action::Submit
            }
        }
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Esc => Action::Quit,
        _ => Action::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn plain_char_inserts() {
        assert_eq!(
            translate(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Action::InsertCodepoint('a')
        );
    }

    #[test]
    fn enter_submits_unless_shifted() {
        assert_eq!(translate(&press(KeyCode::Enter, KeyModifiers::NONE)), Action::Submit);
        assert_eq!(translate(&press(KeyCode::Enter, KeyModifiers::SHIFT)), Action::Newline);
    }

    #[test]
    fn ctrl_c_and_ctrl_d_quit() {
        assert_eq!(translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(translate(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)), Action::Quit);
    }

    #[test]
    fn arrows_and_resize() {
        assert_eq!(translate(&press(KeyCode::Left, KeyModifiers::NONE)), Action::Left);
        assert_eq!(translate(&press(KeyCode::Up, KeyModifiers::NONE)), Action::Up);
        assert_eq!(translate(&Event::Resize(80, 24)), Action::Resize(80, 24));
    }

    #[test]
    fn key_release_is_unknown() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&event), Action::Unknown);
    }
}
