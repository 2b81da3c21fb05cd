use super::action::ActionEvent;
use super::font::Font;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use std::rc::Rc;

/// Push button. Activation (click, or Enter while focused) emits one `ActionEvent` per
/// registered listener.
#[derive(Debug)]
pub struct Button {
    id: Id,
    caption: String,
    action_id: String,
    rect: Rect,
    base_color: Color,
    font: Rc<Font>,
    listeners: Vec<Id>,
    focused: bool,
    pressed: bool,
}

impl Button {
    pub fn new(id: Id, caption: impl Into<String>, font: Rc<Font>) -> Self {
        let caption = caption.into();
        let w = font.text_width(&caption).saturating_add(4);
        Self {
            id,
            caption,
            action_id: String::new(),
            rect: Rect::new(0, 0, w, 3),
            base_color: Color::Rgb(170, 170, 170),
            font,
            listeners: Vec::new(),
            focused: false,
            pressed: false,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn action_id(&self) -> &str {
        &self.action_id
    }

    pub fn set_action_id(&mut self, action_id: impl Into<String>) {
        self.action_id = action_id.into();
    }

    /// Position relative to the parent's client area.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_size(&mut self, w: u16, h: u16) {
        self.rect.w = w;
        self.rect.h = h;
    }

    pub fn set_position(&mut self, x: u16, y: u16) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    pub fn add_action_listener(&mut self, listener: Id) {
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    pub fn listeners(&self) -> &[Id] {
        &self.listeners
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub(crate) fn activate(&self, out: &mut Vec<ActionEvent>) {
        for listener in &self.listeners {
            out.push(ActionEvent {
                source: self.id,
                action_id: self.action_id.clone(),
                listener: *listener,
            });
        }
    }
}

impl Widget for Button {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.register(self.id, NodeKind::Button, 1, Sense::Click);

        let mut face = Style::default()
            .fg(Color::Rgb(0, 0, 0))
            .bg(self.base_color);
        if self.pressed {
            face = face.add_mod(Mod::REVERSE);
        }
        ui.painter.fill_rect(rect, face);
        ui.painter.border(rect, face, BorderKind::Raised);

        let text = self.font.render_text(&self.caption);
        let inner = Rect::new(
            rect.x.saturating_add(1),
            rect.y.saturating_add(rect.h / 2),
            rect.w.saturating_sub(2),
            1,
        );
        let text_w = self.font.text_width(&self.caption).min(inner.w);
        let x = inner.x.saturating_add(inner.w.saturating_sub(text_w) / 2);
        let mut caption_style = face;
        if self.focused {
            caption_style = caption_style.add_mod(Mod::BOLD | Mod::UNDERLINE);
        }
        ui.painter
            .text(Pos::new(x, inner.y), text, caption_style, inner);
    }
}
