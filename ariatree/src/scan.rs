//! Hierarchy scanning and the visible-item projection.

use ariadom::{Document, DocumentError, ElementId, Role};

/// Ordered tree items not hidden behind a closed group.
///
/// Rebuilt from scratch after every structural change; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    items: Vec<ElementId>,
}

impl VisibleSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ElementId> {
        self.items.get(index).copied()
    }

    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.items.iter().position(|&item| item == id)
    }

    /// Index of the last item, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.items.iter().copied()
    }
}

impl From<Vec<ElementId>> for VisibleSet {
    fn from(items: Vec<ElementId>) -> Self {
        Self { items }
    }
}

/// Discovers the tree root inside a container and projects its items.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    root: Option<ElementId>,
}

impl Scanner {
    /// Locate the first tree root at or beneath `container`. A container
    /// without one yields a scanner whose projections are always empty.
    pub fn new(doc: &Document, container: ElementId) -> Self {
        let root = doc.find_role(container, Role::Tree);
        if root.is_none() {
            log::warn!("[tree] no tree root inside {}", container);
        }
        Self { root }
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Walk from the root, entering a group body only when it is open.
    /// Read-only; cost follows the rendered part of the tree.
    pub fn rebuild_visible(&self, doc: &Document) -> VisibleSet {
        let Some(root) = self.root else {
            return VisibleSet::default();
        };
        let items: Vec<ElementId> = doc
            .walk_rendered(root)
            .into_iter()
            .filter(|&id| doc.role(id) == Some(Role::TreeItem))
            .collect();
        log::trace!("[tree] rebuilt visible set: {} item(s)", items.len());
        items.into()
    }

    /// Every tree item, hidden or not, in document order.
    pub fn items(&self, doc: &Document) -> Vec<ElementId> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        doc.descendants(root)
            .into_iter()
            .filter(|&id| doc.role(id) == Some(Role::TreeItem))
            .collect()
    }

    /// Whether `id` lies inside this tree.
    pub fn contains(&self, doc: &Document, id: ElementId) -> bool {
        self.root.is_some_and(|root| doc.contains(root, id))
    }

    /// Whether `id` is a tree item of this tree.
    pub fn is_item(&self, doc: &Document, id: ElementId) -> bool {
        doc.role(id) == Some(Role::TreeItem) && self.contains(doc, id)
    }

    /// The group that owns a tree item: the nearest enclosing group,
    /// resolved through parent links. Groups outside the tree don't count.
    pub fn owning_group(&self, doc: &Document, item: ElementId) -> Option<ElementId> {
        let group = doc.closest(item, Role::Group)?;
        self.contains(doc, group).then_some(group)
    }

    /// Close every group nested beneath `group`. Returns how many changed.
    pub fn close_nested(doc: &mut Document, group: ElementId) -> Result<usize, DocumentError> {
        let nested: Vec<ElementId> = doc
            .descendants(group)
            .into_iter()
            .filter(|&id| doc.role(id) == Some(Role::Group))
            .collect();
        let mut closed = 0;
        for id in nested {
            if doc.set_open(id, false)? {
                closed += 1;
            }
        }
        Ok(closed)
    }
}
