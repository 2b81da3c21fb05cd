//! Input routing: drains the host queue into the widget tree and spots dismissal triggers.

use super::builder::WidgetTree;
use crate::core::event::{ControllerButtonEvent, ControllerId, InputEvent, KeyCode, KeyEventKind};
use crate::settings::{InputMap, SettingsError};
use crate::ui::backend::EventSource;
use crate::ui::widgets::{ActionEvent, ActionListener};

/// What closed the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissCause {
    Key(KeyCode),
    ControllerButton { controller: ControllerId, button: u8 },
    Click,
}

/// Loop flag plus the controller opened for this dialog. `done` never resets.
#[derive(Debug, Default)]
pub struct LoopState {
    done: bool,
    cause: Option<DismissCause>,
    controller: Option<ControllerId>,
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// First trigger wins; later ones are ignored.
    pub fn dismiss(&mut self, cause: DismissCause) {
        if self.done {
            return;
        }
        self.done = true;
        self.cause = Some(cause);
        tracing::info!(?cause, "dialog dismissed");
    }

    pub fn cause(&self) -> Option<DismissCause> {
        self.cause
    }

    pub fn controller(&self) -> Option<ControllerId> {
        self.controller
    }

    pub fn set_controller(&mut self, id: ControllerId) {
        self.controller = Some(id);
    }

    pub fn take_controller(&mut self) -> Option<ControllerId> {
        self.controller.take()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRouter {
    confirm_keys: Vec<KeyCode>,
    confirm_buttons: [u8; 2],
}

impl Default for InputRouter {
    fn default() -> Self {
        Self {
            confirm_keys: vec![KeyCode::Home, KeyCode::PageDown, KeyCode::Enter],
            confirm_buttons: [1, 7],
        }
    }
}

impl InputRouter {
    pub fn from_input_map(map: &InputMap) -> Result<Self, SettingsError> {
        let controller = map.first_controller();
        Ok(Self {
            confirm_keys: map.confirm_keys()?,
            confirm_buttons: [controller.east_button, controller.start_button],
        })
    }

    pub fn confirm_keys(&self) -> &[KeyCode] {
        &self.confirm_keys
    }

    pub fn confirm_buttons(&self) -> [u8; 2] {
        self.confirm_buttons
    }

    /// Drains every pending event. Confirm-key presses dismiss and are still forwarded so
    /// the toolkit sees them; controller events are consumed here. Returns whether anything
    /// arrived.
    pub fn poll<E: EventSource + ?Sized>(
        &self,
        events: &mut E,
        tree: &mut WidgetTree,
        state: &mut LoopState,
    ) -> bool {
        let mut observed = false;
        while let Some(event) = events.poll_event() {
            observed = true;
            match event {
                InputEvent::ControllerButton(button) => self.on_controller(button, state),
                other => {
                    if let Some(code) = self.confirm_key(&other) {
                        state.dismiss(DismissCause::Key(code));
                    }
                    tree.gui_mut().push_input(other);
                }
            }
        }
        observed
    }

    /// Runs the dismiss handler over the actions the toolkit raised.
    pub fn deliver_actions(
        &self,
        actions: &[ActionEvent],
        handler: Option<ActionListener>,
        state: &mut LoopState,
    ) {
        let Some(handler) = handler else {
            return;
        };
        for action in actions.iter().filter(|a| handler.matches(a)) {
            tracing::debug!(action = %action.action_id, "dismiss handler invoked");
            state.dismiss(DismissCause::Click);
        }
    }

    fn confirm_key(&self, event: &InputEvent) -> Option<KeyCode> {
        let key = event.as_key()?;
        (key.kind == KeyEventKind::Press && self.confirm_keys.contains(&key.code)).then_some(key.code)
    }

    fn on_controller(&self, event: ControllerButtonEvent, state: &mut LoopState) {
        if !event.pressed || state.controller() != Some(event.controller) {
            return;
        }
        if self.confirm_buttons.contains(&event.button) {
            state.dismiss(DismissCause::ControllerButton {
                controller: event.controller,
                button: event.button,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/router.rs"]
mod tests;
