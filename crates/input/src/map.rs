//! Key mapping from terminal events to session inputs.

use crate::types::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a session input.
///
/// Releases and terminal auto-repeats map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Input::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Input::Right),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Input::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Input::RotateCw),
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(Input::RotateCcw),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Input::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Input::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Input::SoftDrop));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Input::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(Input::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(Input::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Input::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(Input::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), Some(Input::RotateCcw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('Y'))), Some(Input::RotateCcw));
    }

    #[test]
    fn test_unmapped_and_released_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
