use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events, decoded from crossterm.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Global
    ForceQuit,
    NextSection,        // Tab
    PrevSection,        // Shift+Tab
    ToggleDetail,       // Ctrl+D
    Ping,               // Ctrl+P
    CycleTimeFilter,    // Ctrl+F (inbox pills)
    Escape,
    Resize,

    // Text editing / selection (routed to the active page)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Submit,
    ScrollUp,
    ScrollDown,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::ToggleDetail),
                    (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::Ping),
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::CycleTimeFilter),
                    (KeyModifiers::SHIFT, KeyCode::BackTab) => Some(TuiEvent::PrevSection),
                    // Regular key handling
                    (_, KeyCode::BackTab) => Some(TuiEvent::PrevSection),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextSection),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
