//! Single-dancer selection register.

use crate::dancer::DancerId;

/// Tracks at most one selected dancer.
///
/// The controller is the only place the selection lives; dancers do not
/// carry their own flag and are asked "am I selected?" by identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<DancerId>,
}

impl SelectionController {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection, returning the previous one.
    pub fn set_selected(&mut self, id: Option<DancerId>) -> Option<DancerId> {
        std::mem::replace(&mut self.selected, id)
    }

    /// Currently selected dancer, if any.
    pub fn selected(&self) -> Option<DancerId> {
        self.selected
    }

    /// Check if a dancer is the selected one.
    pub fn is_selected(&self, id: DancerId) -> bool {
        self.selected == Some(id)
    }
}
