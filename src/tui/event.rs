use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Back,
    SignOut,
    /// Jump to a bottom-bar section by position (0-based).
    Section(usize),

    // TUI-local events (handled by the focused screen)
    CursorUp,
    CursorDown,
    Submit,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('o')) => Some(TuiEvent::SignOut),
        (_, KeyCode::Char(c @ '1'..='4')) => Some(TuiEvent::Section(c as usize - '1' as usize)),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => Some(TuiEvent::Back),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter | KeyCode::Right) => Some(TuiEvent::Submit),
        _ => None,
    }
}
