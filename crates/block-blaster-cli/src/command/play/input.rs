use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Player action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Reset,
    Quit,
}

impl Intent {
    /// Maps a terminal event to an intent.
    ///
    /// Only key presses count. Releases and auto-repeats are ignored, so holding
    /// a key down acts once.
    pub(crate) fn from_event(event: &Event) -> Option<Self> {
        let key = event.as_key_event()?;
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let intent = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Down => Self::SoftDrop,
            KeyCode::Up => Self::Rotate,
            KeyCode::Char(' ') => Self::HardDrop,
            KeyCode::Char('r' | 'R') => Self::Reset,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(intent)
    }
}
