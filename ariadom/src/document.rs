//! The mounted element arena.
//!
//! A [`Document`] owns every element of a mounted [`Element`] description.
//! Each node records an explicit parent link at mount/insert time, so
//! structural questions ("which group owns this item?") are answered by
//! walking links rather than by querying a live render tree.

use std::collections::HashMap;
use std::sync::Arc;

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Element, ElementId, Role};
use crate::error::DocumentError;
use crate::event::{CustomEvent, Event, Key, Modifiers, MouseButton};
use crate::focus::{collect_focusable, FocusState};
use crate::layout::LayoutResult;

/// Callback attached to an element for a named [`CustomEvent`].
pub type Listener = Arc<dyn Fn(&CustomEvent) + Send + Sync>;

/// Handle returned by [`Document::add_listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A mounted element.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: ElementId,
    pub key: Option<String>,
    pub role: Role,
    pub label: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,

    /// Open flag for groups.
    pub open: bool,
    pub selected: bool,
    pub focusable: bool,
    pub disabled: bool,
    /// Explicit tab index. `None` falls back to `focusable`.
    pub tab_index: Option<i32>,
}

impl Node {
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Whether Tab navigation may land on this node (ignoring visibility).
    pub fn is_tab_stop(&self) -> bool {
        if self.disabled {
            return false;
        }
        match self.tab_index {
            Some(index) => index >= 0,
            None => self.focusable,
        }
    }
}

struct Registration {
    id: ListenerId,
    element: ElementId,
    name: String,
    listener: Listener,
}

/// Element arena with focus tracking and custom event dispatch.
pub struct Document {
    nodes: Vec<Node>,
    root: ElementId,
    keys: HashMap<String, ElementId>,
    listeners: Vec<Registration>,
    next_listener: u64,
    focus: FocusState,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .field("listeners", &self.listeners.len())
            .field("focused", &self.focus.focused())
            .finish()
    }
}

impl Document {
    /// Mount an element description. Ids are assigned in document order.
    pub fn mount(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: ElementId(0),
            keys: HashMap::new(),
            listeners: Vec::new(),
            next_listener: 0,
            focus: FocusState::new(),
        };
        doc.root = doc.mount_subtree(root, None);
        log::debug!("[dom] mounted {} elements", doc.nodes.len());
        doc
    }

    fn mount_subtree(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.nodes.len());
        if let Some(key) = &element.key {
            self.keys.insert(key.clone(), id);
        }
        self.nodes.push(Node {
            id,
            key: element.key,
            role: element.role,
            label: element.label,
            parent,
            children: Vec::new(),
            open: element.open,
            selected: element.selected,
            focusable: element.focusable,
            disabled: element.disabled,
            tab_index: None,
        });
        for child in element.children {
            let child_id = self.mount_subtree(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn node(&self, id: ElementId) -> Result<&Node, DocumentError> {
        self.get(id).ok_or(DocumentError::UnknownElement(id))
    }

    /// Look up an element by the key it was declared with.
    pub fn by_key(&self, key: &str) -> Option<ElementId> {
        self.keys.get(key).copied()
    }

    pub fn role(&self, id: ElementId) -> Option<Role> {
        self.get(id).map(|n| n.role)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children in document order; empty for unknown ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Ancestors from parent to document root.
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// Closest element with `role`, starting at `id` itself.
    pub fn closest(&self, id: ElementId, role: Role) -> Option<ElementId> {
        if self.role(id)? == role {
            return Some(id);
        }
        self.ancestors(id).find(|&a| self.role(a) == Some(role))
    }

    /// Whether `id` is `ancestor` or lies beneath it.
    pub fn contains(&self, ancestor: ElementId, id: ElementId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        id == ancestor || self.ancestors(id).any(|a| a == ancestor)
    }

    /// All descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// First element with `role` beneath (or at) `start`, in document order.
    pub fn find_role(&self, start: ElementId, role: Role) -> Option<ElementId> {
        if self.role(start)? == role {
            return Some(start);
        }
        self.descendants(start)
            .into_iter()
            .find(|&id| self.role(id) == Some(role))
    }

    // -------------------------------------------------------------------------
    // Disclosure
    // -------------------------------------------------------------------------

    /// The label (first tree item child) of a group.
    pub fn label_of(&self, group: ElementId) -> Option<ElementId> {
        let node = self.get(group)?;
        if node.role != Role::Group {
            return None;
        }
        node.children
            .iter()
            .copied()
            .find(|&c| self.role(c) == Some(Role::TreeItem))
    }

    /// Whether `id` is the label of its parent group.
    pub fn is_label(&self, id: ElementId) -> bool {
        self.parent(id)
            .and_then(|p| self.label_of(p))
            .is_some_and(|label| label == id)
    }

    pub fn is_open(&self, id: ElementId) -> bool {
        self.get(id)
            .is_some_and(|n| n.role == Role::Group && n.open)
    }

    /// Set a group's open flag. Returns whether it changed.
    pub fn set_open(&mut self, id: ElementId, open: bool) -> Result<bool, DocumentError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(DocumentError::UnknownElement(id))?;
        if node.role != Role::Group {
            return Err(DocumentError::NotAGroup(id));
        }
        if node.open == open {
            return Ok(false);
        }
        node.open = open;
        log::trace!("[dom] {} open={}", id, open);
        Ok(true)
    }

    /// Whether `child` sits in the hidden body of a closed `parent` group.
    fn hides(&self, parent: ElementId, child: ElementId) -> bool {
        self.get(parent)
            .is_some_and(|p| p.role == Role::Group && !p.open)
            && self.label_of(parent) != Some(child)
    }

    /// Whether no closed group hides this element.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let mut child = id;
        for ancestor in self.ancestors(id) {
            if self.hides(ancestor, child) {
                return false;
            }
            child = ancestor;
        }
        true
    }

    /// Rendered elements beneath (and including) `start` in document order.
    /// Closed group bodies are skipped without being entered.
    pub fn walk_rendered(&self, start: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if self.get(start).is_none() {
            return out;
        }
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.children(current).iter().rev() {
                if !self.hides(current, child) {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Tree nesting level: 1 for top-level items, +1 per enclosing group
    /// whose body holds the element.
    pub fn level(&self, id: ElementId) -> usize {
        let mut level = 1;
        let mut child = id;
        for ancestor in self.ancestors(id) {
            match self.role(ancestor) {
                Some(Role::Tree) => break,
                Some(Role::Group) if self.label_of(ancestor) != Some(child) => level += 1,
                _ => {}
            }
            child = ancestor;
        }
        level
    }

    /// Run the native default action for an event that no handler
    /// suppressed. A primary click inside a group label, or Enter/Space on a
    /// focused label, toggles the group. Returns the toggled group.
    pub fn default_action(&mut self, event: &Event) -> Option<ElementId> {
        let label = match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
            } => self.closest(*target, Role::TreeItem)?,
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                ..
            } => *target,
            _ => return None,
        };
        if !self.is_label(label) || self.get(label).is_some_and(|n| n.disabled) {
            return None;
        }
        let group = self.parent(label)?;
        let open = !self.is_open(group);
        self.set_open(group, open).ok()?;
        log::debug!("[dom] default action toggled {} open={}", group, open);
        Some(group)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Mount `element` as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: ElementId,
        element: Element,
    ) -> Result<ElementId, DocumentError> {
        let parent_role = self.node(parent)?.role;
        if !parent_role.accepts(element.role) {
            return Err(DocumentError::InvalidParent {
                parent,
                parent_role,
                child_role: element.role,
            });
        }
        let id = self.mount_subtree(element, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<ElementId> {
        self.focus.focused()
    }

    /// Move input focus to `id`. Returns true if focus changed.
    pub fn focus(&mut self, id: ElementId) -> bool {
        match self.get(id) {
            Some(node) if !node.disabled => self.focus.focus(id),
            _ => false,
        }
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur()
    }

    /// Build a key event aimed at the focused element.
    pub fn key_event(&self, key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            target: self.focus.focused(),
            key,
            modifiers,
        }
    }

    /// Process raw crossterm events and produce targeted events.
    /// Tab/BackTab move focus along the tab sequence; mouse presses are
    /// hit-tested against `layout`.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], layout: &LayoutResult) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if matches!(key, Key::Tab | Key::BackTab) {
                        let order = collect_focusable(self);
                        let old = self.focus.focused();
                        let new = if key == Key::Tab {
                            self.focus.focus_next(&order)
                        } else {
                            self.focus.focus_prev(&order)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur {
                                    target: old,
                                    new_target: Some(new),
                                });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focus.focused(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let target =
                            crate::hit::hit_test(layout, self, mouse_event.column, mouse_event.row);
                        log::trace!(
                            "[focus] mouse down at ({}, {}) target={:?}",
                            mouse_event.column,
                            mouse_event.row,
                            target
                        );
                        events.push(Event::Click {
                            target,
                            button: button.into(),
                        });
                    }
                }

                _ => {}
            }
        }

        events
    }

    // -------------------------------------------------------------------------
    // Custom events
    // -------------------------------------------------------------------------

    /// Attach `listener` to `element` for events named `name`.
    pub fn add_listener(
        &mut self,
        element: ElementId,
        name: impl Into<String>,
        listener: Listener,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Registration {
            id,
            element,
            name: name.into(),
            listener,
        });
        id
    }

    /// Returns false if the listener was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to listeners on its target and, if it bubbles, on
    /// every ancestor up to the document root. Returns how many listeners ran.
    pub fn dispatch(&self, event: &CustomEvent) -> usize {
        let mut path = vec![event.target()];
        if event.is_bubbling() {
            path.extend(self.ancestors(event.target()));
        }

        let mut invoked = 0;
        for element in path {
            for registration in self
                .listeners
                .iter()
                .filter(|r| r.element == element && r.name == event.name())
            {
                (registration.listener)(event);
                invoked += 1;
            }
            if event.propagation_stopped() {
                break;
            }
        }
        log::trace!(
            "[dom] dispatched '{}' from {} to {} listener(s)",
            event.name(),
            event.target(),
            invoked
        );
        invoked
    }
}

/// Iterator over an element's ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
