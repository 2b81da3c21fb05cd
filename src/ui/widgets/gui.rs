//! Toolkit driver: input queue, pointer/focus state, action dispatch and drawing.

use super::action::ActionEvent;
use super::button::Button;
use super::container::Container;
use super::font::Font;
use crate::core::event::{InputEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use crate::ui::core::geom::Pos;
use crate::ui::core::id::Id;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{UiEvent, UiRuntime};
use crate::ui::core::tree::UiTree;
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::surface::Surface;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Gui {
    top: Option<Container>,
    font: Option<Rc<Font>>,
    input: VecDeque<InputEvent>,
    runtime: UiRuntime,
    tree: UiTree,
    painter: Painter,
    focused: Option<Id>,
    modal: Option<Id>,
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_top(&mut self, top: Container) {
        self.top = Some(top);
    }

    pub fn top(&self) -> Option<&Container> {
        self.top.as_ref()
    }

    /// Detaches the top container and forgets everything derived from the old tree.
    pub fn take_top(&mut self) -> Option<Container> {
        self.tree.clear();
        self.painter.clear();
        self.runtime.reset_pointer_state();
        self.input.clear();
        self.focused = None;
        self.modal = None;
        self.top.take()
    }

    pub fn set_global_font(&mut self, font: Rc<Font>) {
        self.font = Some(font);
    }

    pub fn global_font(&self) -> Option<&Rc<Font>> {
        self.font.as_ref()
    }

    pub fn take_global_font(&mut self) -> Option<Rc<Font>> {
        self.font.take()
    }

    pub fn focused(&self) -> Option<Id> {
        self.focused
    }

    pub fn request_focus(&mut self, id: Id) {
        self.focused = Some(id);
    }

    /// Restricts pointer input to the widget `id` (a window) until released.
    pub fn request_modal_focus(&mut self, id: Id) {
        self.modal = Some(id);
    }

    pub fn modal_focus(&self) -> Option<Id> {
        self.modal
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push_back(event);
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Hit-test tree from the last `draw`.
    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    /// Drains queued input and returns the actions it triggered, in order.
    pub fn logic(&mut self) -> Vec<ActionEvent> {
        let mut actions = Vec::new();
        while let Some(event) = self.input.pop_front() {
            match &event {
                InputEvent::Mouse(me) => {
                    if !self.accepts_pointer(Pos::new(me.column, me.row)) {
                        match me.kind {
                            // A release always ends the press, wherever it lands.
                            MouseEventKind::Up(_) => {}
                            MouseEventKind::Down(_) => {
                                self.runtime.reset_pointer_state();
                                continue;
                            }
                            _ => continue,
                        }
                    }
                    if let Some(ui_event) = self.runtime.on_input(&event, &self.tree) {
                        self.on_ui_event(ui_event, &mut actions);
                    }
                }
                InputEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Enter {
                        if let Some(button) = self.focused.and_then(|id| self.button(id)) {
                            button.activate(&mut actions);
                        }
                    }
                }
                _ => {}
            }
        }
        actions
    }

    pub fn draw(&mut self, surface: &mut Surface) {
        let pressed = self.runtime.pressed();
        let focused = self.focused;
        if let Some(button) = self.top_button_mut() {
            let id = button.id();
            button.set_pressed(pressed == Some(id));
            button.set_focused(focused == Some(id));
        }

        self.painter.clear();
        self.tree.clear();
        surface.clear();
        if let Some(top) = self.top.as_mut() {
            let mut ui = Ui::new(surface.area(), &mut self.painter, &mut self.tree);
            top.ui(&mut ui);
        }
        surface.apply(self.painter.cmds());
    }

    fn accepts_pointer(&self, pos: Pos) -> bool {
        let Some(modal) = self.modal else {
            return true;
        };
        self.tree.node_contains(modal, pos)
    }

    fn on_ui_event(&mut self, event: UiEvent, actions: &mut Vec<ActionEvent>) {
        match event {
            UiEvent::Pressed { id, .. } => {
                if self.button(id).is_some() {
                    self.focused = Some(id);
                }
            }
            UiEvent::Click {
                id,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(button) = self.button(id) {
                    button.activate(actions);
                }
            }
            UiEvent::Click { .. } => {}
        }
    }

    fn button(&self, id: Id) -> Option<&Button> {
        self.top
            .as_ref()
            .and_then(Container::window)
            .and_then(|w| w.button())
            .filter(|b| b.id() == id)
    }

    fn top_button_mut(&mut self) -> Option<&mut Button> {
        self.top
            .as_mut()
            .and_then(Container::window_mut)
            .and_then(|w| w.button_mut())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/gui.rs"]
mod tests;
