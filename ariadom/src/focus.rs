use crate::document::Document;
use crate::element::ElementId;

/// Tracks which element currently holds input focus.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<ElementId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        log::trace!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id);
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next element of `order` (Tab navigation), wrapping around.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, order: &[ElementId]) -> Option<ElementId> {
        if order.is_empty() {
            return None;
        }

        let new_focus = match self.focused {
            None => order[0],
            Some(current) => match order.iter().position(|&id| id == current) {
                Some(i) => order[(i + 1) % order.len()],
                None => order[0],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous element of `order` (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, order: &[ElementId]) -> Option<ElementId> {
        if order.is_empty() {
            return None;
        }

        let last = order[order.len() - 1];
        let new_focus = match self.focused {
            None => last,
            Some(current) => match order.iter().position(|&id| id == current) {
                Some(0) | None => last,
                Some(i) => order[i - 1],
            },
        };

        self.focus(new_focus).then_some(new_focus)
    }
}

/// Collect the tab sequence: rendered tab stops in document order.
pub fn collect_focusable(doc: &Document) -> Vec<ElementId> {
    doc.walk_rendered(doc.root())
        .into_iter()
        .filter(|&id| doc.get(id).is_some_and(|n| n.is_tab_stop()))
        .collect()
}
