//! Key mapping from terminal events to runner actions.

use crate::types::LifeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an action.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(LifeAction::TogglePause)
        }
        KeyCode::Char('.') | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
            Some(LifeAction::Step)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Reseed),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(LifeAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(LifeAction::Slower),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' '))),
            Some(LifeAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('P'))),
            Some(LifeAction::TogglePause)
        );
    }

    #[test]
    fn test_step_and_reseed_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('.'))), Some(LifeAction::Step));
        assert_eq!(handle_key_event(key(KeyCode::Right)), Some(LifeAction::Step));
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(LifeAction::Reseed));
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('+'))), Some(LifeAction::Faster));
        assert_eq!(handle_key_event(key(KeyCode::Char('='))), Some(LifeAction::Faster));
        assert_eq!(handle_key_event(key(KeyCode::Char('-'))), Some(LifeAction::Slower));
        assert_eq!(handle_key_event(key(KeyCode::Down)), Some(LifeAction::Slower));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
