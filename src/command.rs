use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A logical action requested by the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Leave the program immediately (Ctrl-C)
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Confirm,
    Cancel,
    Home,
    End,
    Next,
    Prev,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('p')) | (KeyModifiers::SHIFT, KeyCode::Char('P')) => {
                Some(Command::Pause)
            }
            (_, KeyCode::Enter) => Some(Command::Confirm),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
            | (KeyModifiers::SHIFT, KeyCode::Char('Q')) => Some(Command::Cancel),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            _ => None,
        }
    }
}
