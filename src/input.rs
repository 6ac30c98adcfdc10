//! Terminal key events to game inputs.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn is_flap_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter)
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Translate one key event.
///
/// `reports_release` says whether the terminal sends key-up events. When it
/// does not, every press is followed by a synthetic release so the flap
/// latch re-arms for the next press.
pub fn map_key_event(key: &KeyEvent, reports_release: bool) -> Vec<GameInput> {
    if is_flap_key(key.code) {
        return match key.kind {
            KeyEventKind::Press if reports_release => vec![GameInput::FlapDown],
            KeyEventKind::Press => vec![GameInput::FlapDown, GameInput::FlapUp],
            KeyEventKind::Repeat => vec![GameInput::FlapDown],
            KeyEventKind::Release => vec![GameInput::FlapUp],
        };
    }

    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }
    if is_quit_key(key) {
        vec![GameInput::Quit]
    } else {
        vec![GameInput::Other]
    }
}
