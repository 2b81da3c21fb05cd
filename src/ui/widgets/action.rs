use crate::ui::core::id::Id;

/// Emitted by a widget when it is activated, once per registered listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionEvent {
    pub source: Id,
    pub action_id: String,
    pub listener: Id,
}

/// Tagged action listener: accepts events addressed to it from one source widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionListener {
    id: Id,
    source: Id,
}

impl ActionListener {
    pub fn new(id: Id, source: Id) -> Self {
        Self { id, source }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn matches(&self, event: &ActionEvent) -> bool {
        event.listener == self.id && event.source == self.source
    }
}
