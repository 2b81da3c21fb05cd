use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn into_input_event(event: crossterm::event::Event) -> InputEvent {
    match event {
        crossterm::event::Event::Key(key) => InputEvent::Key(normalize_key_event(key)),
        crossterm::event::Event::Mouse(mouse) => InputEvent::Mouse(mouse),
        crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
        crossterm::event::Event::FocusGained => InputEvent::FocusGained,
        crossterm::event::Event::FocusLost => InputEvent::FocusLost,
        crossterm::event::Event::Paste(s) => InputEvent::Paste(s),
    }
}

/// Folds terminal-specific encodings into the keys the dialog matches on.
pub fn normalize_key_event(mut event: KeyEvent) -> KeyEvent {
    match event.code {
        // Ctrl+Space arrives as NUL on most terminals.
        KeyCode::Null => {
            event.code = KeyCode::Char(' ');
            event.modifiers |= KeyModifiers::CONTROL;
        }
        // Some terminals report keypad Enter / Ctrl+M as a carriage return char.
        KeyCode::Char('\r') | KeyCode::Char('\n') => {
            event.code = KeyCode::Enter;
        }
        _ => {}
    }
    event
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
