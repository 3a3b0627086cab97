//! src/controller/keymap.rs
//! ============================================================================
//! # KeyMap: terminal key events → actions
//!
//! Translation depends on where the user is: the listing in browse mode, the
//! listing with the search box focused, the detail screen, or the help
//! overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::actions::Action;

/// Input context the key map needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Browse,
    Search,
    Detail,
    Help,
}

pub struct KeyMap;

impl KeyMap {
    pub fn map(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match ctx {
            KeyContext::Help => Self::help(key),
            KeyContext::Search => Self::search(key),
            KeyContext::Detail => Self::detail(key),
            KeyContext::Browse => Self::browse(key),
        }
    }

    fn browse(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst,
            KeyCode::End | KeyCode::Char('G') => Action::SelectLast,
            KeyCode::Enter => Action::OpenSelected,
            KeyCode::Char(' ') | KeyCode::Char('l') => Action::ToggleFavorite,
            KeyCode::Char('/') => Action::EnterSearch,
            KeyCode::Char('a') => Action::ToggleAlcoholic,
            KeyCode::Char('n') => Action::ToggleNonAlcoholic,
            KeyCode::Char('f') => Action::ToggleFavoritesOnly,
            KeyCode::Char('m') => Action::LoadMore,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => return None,
        };
        Some(action)
    }

    fn search(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::ExitSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::SearchInput(c))
            }
            _ => None,
        }
    }

    fn detail(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
            KeyCode::Char(' ') | KeyCode::Char('l') => Action::ToggleFavorite,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => return None,
        };
        Some(action)
    }

    fn help(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Some(Action::CloseOverlay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_are_commands_in_browse_and_text_in_search() {
        assert_eq!(
            KeyMap::map(key(KeyCode::Char('a')), KeyContext::Browse),
            Some(Action::ToggleAlcoholic)
        );
        assert_eq!(
            KeyMap::map(key(KeyCode::Char('a')), KeyContext::Search),
            Some(Action::SearchInput('a'))
        );
        assert_eq!(
            KeyMap::map(key(KeyCode::Char('q')), KeyContext::Search),
            Some(Action::SearchInput('q'))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [
            KeyContext::Browse,
            KeyContext::Search,
            KeyContext::Detail,
            KeyContext::Help,
        ] {
            assert_eq!(KeyMap::map(ctrl_c, ctx), Some(Action::Quit));
        }
    }

    #[test]
    fn test_detail_bindings() {
        assert_eq!(
            KeyMap::map(key(KeyCode::Esc), KeyContext::Detail),
            Some(Action::Back)
        );
        assert_eq!(
            KeyMap::map(key(KeyCode::Char(' ')), KeyContext::Detail),
            Some(Action::ToggleFavorite)
        );
        assert_eq!(KeyMap::map(key(KeyCode::Char('a')), KeyContext::Detail), None);
    }

    #[test]
    fn test_ctrl_u_clears_search() {
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(
            KeyMap::map(ctrl_u, KeyContext::Search),
            Some(Action::ClearSearch)
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(KeyMap::map(release, KeyContext::Browse), None);
    }
}
