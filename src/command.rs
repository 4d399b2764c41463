use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Command::Up)]
    #[case(KeyCode::Down, Command::Down)]
    #[case(KeyCode::Left, Command::Left)]
    #[case(KeyCode::Right, Command::Right)]
    #[case(KeyCode::Char('w'), Command::Up)]
    #[case(KeyCode::Char('j'), Command::Down)]
    #[case(KeyCode::Char('h'), Command::Left)]
    #[case(KeyCode::Char('l'), Command::Right)]
    #[case(KeyCode::Char(' '), Command::Space)]
    #[case(KeyCode::Enter, Command::Enter)]
    #[case(KeyCode::Char('r'), Command::R)]
    #[case(KeyCode::Char('q'), Command::Q)]
    fn test_from_key_event(#[case] code: KeyCode, #[case] cmd: Command) {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(code, KeyModifiers::NONE)),
            Some(cmd)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::SHIFT))]
    #[case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))]
    fn unrecognized_keys_are_ignored(#[case] ev: KeyEvent) {
        assert_eq!(Command::from_key_event(ev), None);
    }
}
