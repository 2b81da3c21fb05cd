use super::geom::Pos;
use super::id::Id;
use super::tree::UiTree;
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Pressed {
        id: Id,
        pos: Pos,
    },
    Click {
        id: Id,
        button: MouseButton,
        pos: Pos,
    },
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    target: Option<Id>,
}

/// Pairs pointer presses and releases into clicks.
#[derive(Debug, Default)]
pub struct UiRuntime {
    pressed: Option<PressedState>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// The click target currently held down, if any.
    pub fn pressed(&self) -> Option<Id> {
        self.pressed.and_then(|p| p.target)
    }

    /// Forgets any press in progress; the next release is not a click.
    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> Option<UiEvent> {
        let InputEvent::Mouse(me) = input else {
            return None;
        };
        let pos = Pos::new(me.column, me.row);

        match me.kind {
            MouseEventKind::Down(button) => {
                let target = tree.click_target(pos);
                self.pressed = Some(PressedState { button, target });
                target.map(|id| UiEvent::Pressed { id, pos })
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take()?;
                if pressed.button != button {
                    return None;
                }
                // A click needs press and release over the same node.
                let id = pressed.target?;
                (tree.click_target(pos) == Some(id)).then_some(UiEvent::Click { id, button, pos })
            }
            MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
