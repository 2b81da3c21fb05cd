use super::font::Font;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::style::{Color, Style};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use std::rc::Rc;

/// Single-line, non-interactive text. Text wider than the label is clipped.
#[derive(Debug)]
pub struct Label {
    id: Id,
    caption: String,
    rect: Rect,
    font: Rc<Font>,
    style: Style,
}

impl Label {
    pub fn new(id: Id, caption: impl Into<String>, font: Rc<Font>) -> Self {
        let caption = caption.into();
        let w = font.text_width(&caption);
        Self {
            id,
            caption,
            rect: Rect::new(0, 0, w, 1),
            font,
            style: Style::default().fg(Color::Rgb(0, 0, 0)),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
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
        self.style = self.style.bg(color);
    }
}

impl Widget for Label {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.register(self.id, NodeKind::Label, 1, Sense::Inert);
        let text = self.font.render_text(&self.caption);
        ui.painter
            .text(Pos::new(rect.x, rect.y), text, self.style, rect);
    }
}
