use super::action::ActionListener;
use super::button::Button;
use super::label::Label;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

/// Framed, captioned window. Owns its label, its button and the listeners wired to it.
#[derive(Debug)]
pub struct Window {
    id: Id,
    caption: String,
    rect: Rect,
    title_bar_height: u16,
    base_color: Color,
    label: Option<Label>,
    button: Option<Button>,
    listeners: Vec<ActionListener>,
}

impl Window {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            caption: String::new(),
            rect: Rect::default(),
            title_bar_height: 1,
            base_color: Color::Rgb(170, 170, 170),
            label: None,
            button: None,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

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

    pub fn set_title_bar_height(&mut self, h: u16) {
        self.title_bar_height = h;
    }

    /// Area below the title bar and inside the frame, in absolute coordinates.
    pub fn client_rect(&self) -> Rect {
        self.rect
            .inset(Insets::new(1, 1, self.title_bar_height.max(1), 1))
    }

    pub fn add_label(&mut self, mut label: Label, x: u16, y: u16) {
        label.set_position(x, y);
        self.label = Some(label);
    }

    pub fn add_button(&mut self, button: Button) {
        self.button = Some(button);
    }

    pub fn add_action_listener(&mut self, listener: ActionListener) {
        self.listeners.push(listener);
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn button(&self) -> Option<&Button> {
        self.button.as_ref()
    }

    pub fn button_mut(&mut self) -> Option<&mut Button> {
        self.button.as_mut()
    }

    pub fn listeners(&self) -> &[ActionListener] {
        &self.listeners
    }

    pub fn take_label(&mut self) -> Option<Label> {
        self.label.take()
    }

    pub fn take_button(&mut self) -> Option<Button> {
        self.button.take()
    }

    pub fn take_listeners(&mut self) -> Vec<ActionListener> {
        std::mem::take(&mut self.listeners)
    }

    /// Absolute rect of a child positioned relative to the client area, clipped to it.
    pub fn child_rect(&self, rel: Rect) -> Rect {
        self.client_rect().place(rel)
    }
}

impl Widget for Window {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        ui.register(self.id, NodeKind::Window, 1, Sense::Inert);

        let base = Style::default()
            .fg(Color::Rgb(0, 0, 0))
            .bg(self.base_color);
        ui.painter.fill_rect(rect, base);
        ui.painter.border(rect, base, BorderKind::Plain);

        let (title, _) = rect
            .inset(Insets::new(1, 1, 0, 0))
            .split_top(self.title_bar_height.max(1));
        let title_style = Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(Color::Rgb(0, 85, 170))
            .add_mod(Mod::BOLD);
        ui.painter.fill_rect(title, title_style);
        ui.painter.text(
            Pos::new(title.x.saturating_add(1), title.y),
            self.caption.clone(),
            title_style,
            title,
        );

        let label_rect = self.label.as_ref().map(|l| self.child_rect(l.rect()));
        if let (Some(label), Some(r)) = (self.label.as_mut(), label_rect) {
            ui.with_rect(r, |ui| label.ui(ui));
        }
        let button_rect = self.button.as_ref().map(|b| self.child_rect(b.rect()));
        if let (Some(button), Some(r)) = (self.button.as_mut(), button_rect) {
            ui.with_rect(r, |ui| button.ui(ui));
        }
    }
}
