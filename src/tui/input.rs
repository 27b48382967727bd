use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Page(Direction),
    NextType,
    PrevType,
    Toggle,
    ToggleHelp,
    Quit,
    Noop,
}

pub fn action_for_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::PageUp => Action::Page(Direction::Up),
        KeyCode::PageDown => Action::Page(Direction::Down),
        KeyCode::Tab => Action::NextType,
        KeyCode::BackTab => Action::PrevType,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_move() {
        assert_eq!(action_for_key(key(KeyCode::Char('j'))), Action::Move(Direction::Down));
        assert_eq!(action_for_key(key(KeyCode::Up)), Action::Move(Direction::Up));
    }

    #[test]
    fn enter_and_space_toggle() {
        assert_eq!(action_for_key(key(KeyCode::Enter)), Action::Toggle);
        assert_eq!(action_for_key(key(KeyCode::Char(' '))), Action::Toggle);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ev), Action::Quit);
        assert_eq!(action_for_key(key(KeyCode::Char('c'))), Action::Noop);
    }
}
