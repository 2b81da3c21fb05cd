pub use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Host joystick/controller instance, as handed out by `EventSource::open_controller`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerButtonEvent {
    pub controller: ControllerId,
    pub button: u8,
    pub pressed: bool,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Pointer coordinates are in logical (surface) space.
    Mouse(MouseEvent),
    ControllerButton(ControllerButtonEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

impl InputEvent {
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(e) => Some(e),
            _ => None,
        }
    }

    pub fn key_press(code: KeyCode) -> Self {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Self {
        InputEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    pub fn controller_press(controller: ControllerId, button: u8) -> Self {
        InputEvent::ControllerButton(ControllerButtonEvent {
            controller,
            button,
            pressed: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
