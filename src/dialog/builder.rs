//! Builds the fixed dialog layout and tears it down in reverse order.

use super::error::SetupError;
use crate::settings::DialogSettings;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::style::Color;
use crate::ui::surface::Surface;
use crate::ui::widgets::font::init_font_subsystem;
use crate::ui::widgets::{
    ActionEvent, ActionListener, Button, Container, Font, Gui, Label, Window,
};
use std::rc::Rc;

pub const DIALOG_WIDTH: u16 = 60;
pub const DIALOG_HEIGHT: u16 = 9;
pub const TITLE_BAR_HEIGHT: u16 = 1;
pub const DISTANCE_BORDER: u16 = 2;
pub const DISTANCE_NEXT_X: u16 = 1;
pub const BUTTON_WIDTH: u16 = 8;
pub const BUTTON_HEIGHT: u16 = 3;

pub const BASE_COLOR: Color = Color::Rgb(170, 170, 170);
pub const WINDOW_CAPTION: &str = "Information";
pub const BUTTON_CAPTION: &str = "Ok";
pub const DONE_ACTION: &str = "Done";

/// Widget ids of one dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeIds {
    pub container: Id,
    pub window: Id,
    pub label: Id,
    pub button: Id,
    pub dismiss_handler: Id,
}

impl TreeIds {
    fn new() -> Self {
        let root = IdPath::root("ingame_message");
        Self {
            container: root.child("container"),
            window: root.child("window"),
            label: root.child("label"),
            button: root.child("button"),
            dismiss_handler: root.child("dismiss"),
        }
    }
}

/// Parts released by `WidgetTree::teardown`, in the order they go away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Label,
    Button,
    DismissHandler,
    Window,
    Font,
    Container,
}

/// Container, modal window, label, Ok button and dismiss handler, plus the `Gui` that
/// drives them.
#[derive(Debug)]
pub struct WidgetTree {
    gui: Gui,
    ids: TreeIds,
    dismiss_handler: Option<ActionListener>,
}

impl WidgetTree {
    pub fn build(message: &str, settings: &DialogSettings) -> Result<Self, SetupError> {
        let ids = TreeIds::new();
        let logical = settings.logical_size();
        let mut gui = Gui::new();

        let mut container = Container::new(ids.container);
        container.set_size(logical.w, logical.h);
        container.set_base_color(BASE_COLOR);

        init_font_subsystem();
        let font = Rc::new(Font::load(&settings.font_path, settings.font_size)?);
        gui.set_global_font(Rc::clone(&font));

        let mut window = Window::new(ids.window);
        window.set_caption(WINDOW_CAPTION);
        window.set_title_bar_height(TITLE_BAR_HEIGHT);
        window.set_base_color(BASE_COLOR);
        let frame = Rect::from_size(logical).centered(DIALOG_WIDTH, DIALOG_HEIGHT);
        window.set_size(frame.w, frame.h);
        window.set_position(frame.x, frame.y);

        let mut label = Label::new(ids.label, message, Rc::clone(&font));
        label.set_size(DIALOG_WIDTH - 2 * DISTANCE_BORDER, 1);
        label.set_base_color(BASE_COLOR);
        window.add_label(label, DISTANCE_BORDER, DISTANCE_BORDER - 1);

        let mut button = Button::new(ids.button, BUTTON_CAPTION, Rc::clone(&font));
        button.set_action_id(DONE_ACTION);
        button.set_base_color(BASE_COLOR);
        button.set_size(BUTTON_WIDTH, BUTTON_HEIGHT);
        button.set_position(
            DIALOG_WIDTH - DISTANCE_BORDER - 2 * BUTTON_WIDTH - DISTANCE_NEXT_X,
            window.client_rect().h.saturating_sub(BUTTON_HEIGHT),
        );

        let handler = ActionListener::new(ids.dismiss_handler, ids.button);
        button.add_action_listener(handler.id());
        window.add_action_listener(handler);
        window.add_button(button);

        container.add(window);
        gui.set_top(container);
        gui.request_focus(ids.button);
        gui.request_modal_focus(ids.window);
        tracing::debug!(len = message.len(), "dialog widgets built");

        Ok(Self {
            gui,
            ids,
            dismiss_handler: Some(handler),
        })
    }

    pub fn ids(&self) -> TreeIds {
        self.ids
    }

    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut Gui {
        &mut self.gui
    }

    pub fn dismiss_handler(&self) -> Option<ActionListener> {
        self.dismiss_handler
    }

    pub fn is_built(&self) -> bool {
        self.gui.top().is_some()
    }

    pub fn logic(&mut self) -> Vec<ActionEvent> {
        self.gui.logic()
    }

    pub fn draw(&mut self, surface: &mut Surface) {
        self.gui.draw(surface);
    }

    /// Label, button, dismiss handler, window, font, container. Returns what was released;
    /// empty once everything is gone.
    pub fn teardown(&mut self) -> Vec<Part> {
        let mut released = Vec::new();
        let mut top = self.gui.take_top();

        if let Some(mut window) = top.as_mut().and_then(Container::remove) {
            if window.take_label().is_some() {
                released.push(Part::Label);
            }
            if window.take_button().is_some() {
                released.push(Part::Button);
            }
            let listeners = window.take_listeners();
            let handler = self.dismiss_handler.take();
            if !listeners.is_empty() || handler.is_some() {
                released.push(Part::DismissHandler);
            }
            drop(window);
            released.push(Part::Window);
        } else if self.dismiss_handler.take().is_some() {
            released.push(Part::DismissHandler);
        }

        if let Some(font) = self.gui.take_global_font() {
            let holders = Rc::strong_count(&font);
            if holders > 1 {
                tracing::warn!(holders, "font still referenced at teardown");
            }
            drop(font);
            released.push(Part::Font);
        }

        if top.take().is_some() {
            released.push(Part::Container);
        }

        if !released.is_empty() {
            tracing::debug!(?released, "dialog widgets torn down");
        }
        released
    }
}

impl Drop for WidgetTree {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/builder.rs"]
mod tests;
