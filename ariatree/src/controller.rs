//! The tree controller: selection, projection and deferred structure work.

use std::sync::Arc;

use ariadom::{CustomEvent, Document, ElementId, ListenerId};

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::notify::{notify, DefaultBehavior, SelectionChange, TreeBehavior};
use crate::scan::{Scanner, VisibleSet};
use crate::schedule::{Scheduler, Task};
use crate::selection::{self, SelectionState};

/// Keyboard- and pointer-driven single-selection tree over a [`Document`].
///
/// The controller owns the document it manages. Items are addressed by
/// [`ElementId`]; the visible set is re-projected after structural changes,
/// which are queued and run by [`tick`](Self::tick) or
/// [`settle`](Self::settle).
///
/// # Example
///
/// ```
/// use ariadom::{Document, Element, Event, Key};
/// use ariatree::TreeController;
///
/// let doc = Document::mount(
///     Element::tree().child(Element::folder("src", vec![Element::item("main.rs")])),
/// );
/// let mut tree = TreeController::new(doc);
/// let target = tree.selected();
/// tree.dispatch(&Event::key(target, Key::Right));
/// tree.tick();
/// assert_eq!(tree.visible().len(), 2);
/// ```
pub struct TreeController<B: TreeBehavior = DefaultBehavior> {
    pub(crate) doc: Document,
    container: ElementId,
    pub(crate) scanner: Scanner,
    pub(crate) visible: VisibleSet,
    pub(crate) selection: SelectionState,
    pub(crate) scheduler: Scheduler,
    pub(crate) config: TreeConfig,
    behavior: B,
    subscriptions: Vec<ListenerId>,
}

impl<B: TreeBehavior> std::fmt::Debug for TreeController<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeController")
            .field("container", &self.container)
            .field("root", &self.scanner.root())
            .field("visible", &self.visible.len())
            .field("selected", &self.selection.selected())
            .field("idle", &self.scheduler.is_idle())
            .finish()
    }
}

/// Builder for [`TreeController`].
pub struct TreeControllerBuilder<B: TreeBehavior = DefaultBehavior> {
    doc: Document,
    container: Option<ElementId>,
    config: TreeConfig,
    behavior: B,
}

impl<B: TreeBehavior> TreeControllerBuilder<B> {
    /// Element holding the tree. Pointer handling only looks at clicks
    /// inside it. Defaults to the tree root found in the document.
    pub fn container(mut self, container: ElementId) -> Self {
        self.container = Some(container);
        self
    }

    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap in a specialized behavior.
    pub fn behavior<C: TreeBehavior>(self, behavior: C) -> TreeControllerBuilder<C> {
        TreeControllerBuilder {
            doc: self.doc,
            container: self.container,
            config: self.config,
            behavior,
        }
    }

    pub fn build(self) -> TreeController<B> {
        let search = self.container.unwrap_or_else(|| self.doc.root());
        let scanner = Scanner::new(&self.doc, search);
        let container = self.container.or(scanner.root()).unwrap_or(search);
        let visible = scanner.rebuild_visible(&self.doc);
        let mut tree = TreeController {
            doc: self.doc,
            container,
            scanner,
            visible,
            selection: SelectionState::new(),
            scheduler: Scheduler::new(),
            config: self.config,
            behavior: self.behavior,
            subscriptions: Vec::new(),
        };
        tree.select_initial();
        tree
    }
}

impl TreeController<DefaultBehavior> {
    /// Controller over the whole document with default config.
    pub fn new(doc: Document) -> Self {
        Self::builder(doc).build()
    }

    pub fn builder(doc: Document) -> TreeControllerBuilder<DefaultBehavior> {
        TreeControllerBuilder {
            doc,
            container: None,
            config: TreeConfig::default(),
            behavior: DefaultBehavior,
        }
    }
}

impl<B: TreeBehavior> TreeController<B> {
    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable document access. Structural edits made here become visible
    /// after [`refresh`](Self::refresh).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The tree root, if the container holds one.
    pub fn root(&self) -> Option<ElementId> {
        self.scanner.root()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    /// Position of the selection in the current visible set. `None` when
    /// nothing is selected or the set is stale and no longer holds it.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
            .selected()
            .and_then(|item| self.visible.position(item))
    }

    /// Whether deferred work is queued.
    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_idle()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    fn select_initial(&mut self) {
        let premarked = self
            .visible
            .iter()
            .position(|id| self.doc.get(id).is_some_and(|n| n.selected));
        log::debug!(
            "[tree] init: {} visible item(s), pre-selected={:?}",
            self.visible.len(),
            premarked
        );
        self.set_selected(premarked.unwrap_or(0));
    }

    /// Select the visible item at `index`. Out of range is a no-op.
    ///
    /// The first application (during construction) leaves input focus
    /// alone; every later one focuses the selected item. Observers are only
    /// notified when the selected item changes.
    pub fn set_selected(&mut self, index: usize) {
        let Some(item) = self.visible.get(index) else {
            log::trace!(
                "[tree] set_selected({}) ignored, {} visible",
                index,
                self.visible.len()
            );
            return;
        };

        let items = self.scanner.items(&self.doc);
        selection::apply(&mut self.doc, &items, item);

        if self.selection.take_focus() {
            self.doc.focus(item);
        }

        if self.selection.replace(item, index) {
            if let Some(root) = self.scanner.root() {
                let change = SelectionChange {
                    selected_index: index,
                    selected_item: item,
                };
                notify(&mut self.doc, root, &mut self.behavior, change);
            }
        }
    }

    /// Select a visible item by id.
    pub fn select_node(&mut self, item: ElementId) -> Result<(), TreeError> {
        let index = self
            .visible
            .position(item)
            .ok_or(TreeError::NotVisible(item))?;
        self.set_selected(index);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Expand / collapse
    // -------------------------------------------------------------------------

    /// Open the group owning `item` and queue a rescan.
    /// Returns whether anything changed.
    pub fn expand(&mut self, item: ElementId) -> Result<bool, TreeError> {
        let Some(group) = self.scanner.owning_group(&self.doc, item) else {
            return Ok(false);
        };
        let changed = self.doc.set_open(group, true)?;
        if changed {
            log::debug!("[tree] expand {} (group {})", item, group);
            self.scheduler.schedule(Task::Rescan);
        }
        Ok(changed)
    }

    /// Close the group owning `item` along with every group nested beneath
    /// it, and queue a rescan. Returns whether anything changed.
    pub fn collapse(&mut self, item: ElementId) -> Result<bool, TreeError> {
        let Some(group) = self.scanner.owning_group(&self.doc, item) else {
            return Ok(false);
        };
        let closed = self.doc.set_open(group, false)?;
        let nested = Scanner::close_nested(&mut self.doc, group)?;
        let changed = closed || nested > 0;
        if changed {
            log::debug!(
                "[tree] collapse {} (group {}, {} nested closed)",
                item,
                group,
                nested
            );
            self.scheduler.schedule(Task::Rescan);
        }
        Ok(changed)
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    /// Rebuild the visible set now and re-apply the selection.
    ///
    /// If the selected item got hidden, the selection moves to the label of
    /// its nearest visible enclosing group, or failing that to the same
    /// index clamped into range.
    pub fn refresh(&mut self) {
        self.visible = self.scanner.rebuild_visible(&self.doc);
        if self.visible.is_empty() {
            return;
        }

        let current = self.selection.selected();
        match current.and_then(|item| Some((item, self.visible.position(item)?))) {
            Some((item, index)) => {
                let items = self.scanner.items(&self.doc);
                selection::apply(&mut self.doc, &items, item);
                self.selection.replace(item, index);
            }
            None => {
                let index = current
                    .and_then(|item| self.nearest_visible_label(item))
                    .or_else(|| {
                        let last = self.visible.last_index()?;
                        Some(self.selection.last_index().unwrap_or(0).min(last))
                    })
                    .unwrap_or(0);
                log::debug!(
                    "[tree] selection {:?} hidden, reclamped to index {}",
                    current,
                    index
                );
                self.set_selected(index);
            }
        }
    }

    fn nearest_visible_label(&self, item: ElementId) -> Option<usize> {
        self.doc
            .ancestors(item)
            .filter(|&a| self.scanner.contains(&self.doc, a))
            .filter_map(|a| self.doc.label_of(a))
            .filter(|&label| label != item)
            .find_map(|label| self.visible.position(label))
    }

    /// Run queued work. Returns whether anything ran.
    pub fn tick(&mut self) -> bool {
        let tasks = self.scheduler.drain();
        if tasks.is_empty() {
            return false;
        }
        for task in tasks {
            match task {
                Task::CloseSubfolders(item) => self.close_subfolders(item),
                Task::Rescan => self.refresh(),
            }
        }
        true
    }

    /// Wait for the settle delay, then run queued work.
    /// Returns immediately with false when nothing is queued.
    pub async fn settle(&mut self) -> bool {
        if self.scheduler.is_idle() {
            return false;
        }
        tokio::time::sleep(self.config.settle_delay).await;
        self.tick()
    }

    fn close_subfolders(&mut self, item: ElementId) {
        let Some(group) = self.scanner.owning_group(&self.doc, item) else {
            return;
        };
        if self.doc.is_open(group) {
            return;
        }
        match Scanner::close_nested(&mut self.doc, group) {
            Ok(closed) => log::debug!("[tree] closed {} subfolder(s) of {}", closed, group),
            Err(e) => log::warn!("[tree] closing subfolders of {} failed: {}", group, e),
        }
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Listen for selection changes on the tree root. Returns `None` when
    /// there is no tree root to listen on.
    pub fn subscribe<F>(&mut self, callback: F) -> Option<ListenerId>
    where
        F: Fn(&SelectionChange) + Send + Sync + 'static,
    {
        let root = self.scanner.root()?;
        let name = self.behavior.event_name().to_string();
        let id = self.doc.add_listener(
            root,
            name,
            Arc::new(move |event: &CustomEvent| {
                if let Some(change) = event.detail::<SelectionChange>() {
                    callback(change);
                }
            }),
        );
        self.subscriptions.push(id);
        Some(id)
    }

    /// Tear the controller down: release its subscriptions and return the
    /// document.
    pub fn into_document(mut self) -> Document {
        for id in self.subscriptions.drain(..) {
            self.doc.remove_listener(id);
        }
        self.doc
    }
}
