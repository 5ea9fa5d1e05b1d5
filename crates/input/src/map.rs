//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction, GamePhase};

/// Map a movement key to its direction.
///
/// Arrow keys, WASD, and hjkl are all accepted, upper or lower case.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Direction::Right)
        }
        _ => None,
    }
}

/// Map keyboard input to game actions for the current phase.
///
/// Each phase answers only to its own keys; everything else is ignored and
/// maps to `None`.
pub fn handle_key_event(key: KeyEvent, phase: GamePhase) -> Option<GameAction> {
    match phase {
        GamePhase::Menu => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
            _ => None,
        },
        GamePhase::Playing => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            code => direction_for(code).map(GameAction::Move),
        },
        GamePhase::Won => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            _ => None,
        },
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
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for(KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(direction_for(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(direction_for(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(direction_for(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(direction_for(KeyCode::Char('d')), Some(Direction::Right));

        assert_eq!(direction_for(KeyCode::Char('W')), Some(Direction::Up));
        assert_eq!(direction_for(KeyCode::Char('D')), Some(Direction::Right));
    }

    #[test]
    fn test_hjkl_keys() {
        assert_eq!(direction_for(KeyCode::Char('h')), Some(Direction::Left));
        assert_eq!(direction_for(KeyCode::Char('j')), Some(Direction::Down));
        assert_eq!(direction_for(KeyCode::Char('k')), Some(Direction::Up));
        assert_eq!(direction_for(KeyCode::Char('l')), Some(Direction::Right));
    }

    #[test]
    fn test_menu_only_starts() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), GamePhase::Menu),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' ')), GamePhase::Menu),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up), GamePhase::Menu),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), GamePhase::Menu),
            None
        );
    }

    #[test]
    fn test_playing_moves_and_restarts() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up), GamePhase::Playing),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d')), GamePhase::Playing),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), GamePhase::Playing),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter), GamePhase::Playing),
            None
        );
    }

    #[test]
    fn test_won_only_restarts() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r')), GamePhase::Won),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R')), GamePhase::Won),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left), GamePhase::Won),
            None
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        for phase in [GamePhase::Menu, GamePhase::Playing, GamePhase::Won] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char('x')), phase),
                None
            );
            assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab), phase), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
