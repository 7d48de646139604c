//! Single-selection state.

use ariadom::{Document, ElementId};

/// The selected tree item plus the one-shot focus latch.
///
/// `selected` is the backing field: change notifications key off
/// [`replace`](Self::replace), not off every selection request.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<ElementId>,
    /// Index the selection had in the visible set when last applied.
    last_index: Option<usize>,
    /// Set after the first application; from then on selecting moves focus.
    focus_armed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Store a new selection. Returns true if the selected item changed.
    pub(crate) fn replace(&mut self, item: ElementId, index: usize) -> bool {
        self.last_index = Some(index);
        if self.selected == Some(item) {
            return false;
        }
        self.selected = Some(item);
        true
    }

    /// Whether this application may move focus. The first call answers
    /// false and arms the latch; every later call answers true.
    pub(crate) fn take_focus(&mut self) -> bool {
        std::mem::replace(&mut self.focus_armed, true)
    }
}

/// Write the selection onto the items: `selected` on exactly one, and a
/// single roving tab stop.
pub(crate) fn apply(doc: &mut Document, items: &[ElementId], selected: ElementId) {
    for &id in items {
        if let Some(node) = doc.get_mut(id) {
            let is_selected = id == selected;
            node.selected = is_selected;
            node.tab_index = Some(if is_selected { 0 } else { -1 });
        }
    }
}
