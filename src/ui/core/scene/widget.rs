use super::geom::Rect;
use super::id::Id;
use super::painter::Painter;
use super::tree::{Node, NodeKind, Sense, UiTree};

/// Paint/hit-test context handed to a widget for one draw pass.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter, tree: &'a mut UiTree) -> Self {
        Self {
            rect,
            painter,
            tree,
        }
    }

    /// Records the widget drawn into the current rect so input can find it.
    pub fn register(&mut self, id: Id, kind: NodeKind, layer: u8, sense: Sense) {
        self.tree.push(Node {
            id,
            rect: self.rect,
            layer,
            sense,
            kind,
        });
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: self.painter,
            tree: self.tree,
        };
        f(&mut child)
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}
