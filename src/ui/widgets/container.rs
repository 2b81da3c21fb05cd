use super::window::Window;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::Id;
use crate::ui::core::style::{Color, Style};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

/// Root of the widget tree: a filled background holding at most one window.
#[derive(Debug)]
pub struct Container {
    id: Id,
    rect: Rect,
    base_color: Color,
    window: Option<Window>,
}

impl Container {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            rect: Rect::default(),
            base_color: Color::Rgb(170, 170, 170),
            window: None,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_size(&mut self, w: u16, h: u16) {
        self.rect.w = w;
        self.rect.h = h;
    }

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn add(&mut self, window: Window) {
        self.window = Some(window);
    }

    pub fn remove(&mut self) -> Option<Window> {
        self.window.take()
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut Window> {
        self.window.as_mut()
    }
}

impl Widget for Container {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = self.rect.intersect(ui.rect);
        if rect.is_empty() {
            return;
        }
        let (id, bg) = (self.id, self.base_color);
        let window = self.window.as_mut();
        ui.with_rect(rect, |ui| {
            ui.register(id, NodeKind::Container, 0, Sense::Inert);
            ui.painter.fill_rect(rect, Style::default().bg(bg));
            if let Some(window) = window {
                let r = window.rect().intersect(rect);
                ui.with_rect(r, |ui| window.ui(ui));
            }
        });
    }
}
