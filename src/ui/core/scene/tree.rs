use super::geom::{Pos, Rect};
use super::id::Id;

/// Pointer interaction a node takes part in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sense {
    /// Painted and registered for lookups, never a click target.
    #[default]
    Inert,
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Window,
    Label,
    Button,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Nodes registered by the last draw pass, in paint order.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Whether `p` lies inside the node `id`; false if `id` was not drawn.
    pub fn node_contains(&self, id: Id, p: Pos) -> bool {
        self.node(id).is_some_and(|n| n.contains(p))
    }

    /// Topmost click target under `p`. Higher layers win, then later paint order.
    pub fn click_target(&self, p: Pos) -> Option<Id> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.sense == Sense::Click && n.contains(p))
            .max_by_key(|(order, n)| (n.layer, *order))
            .map(|(_, n)| n.id)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/tree.rs"]
mod tests;
