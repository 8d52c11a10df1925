use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Esc, Left, Right, Tab};

    // Windows reports releases as well
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if matches!(key.code, Char('q') | Esc) && key.modifiers.is_empty() {
        return Action::Quit;
    }

    match key.code {
        Tab | Left | Right => app.toggle_view(),
        Char('u') => app.view = View::Upcoming,
        Char('c') => app.view = View::Calendar,
        _ => {}
    }
    Action::None
}
