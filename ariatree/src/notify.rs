//! Selection change notifications and the extension hook.

use ariadom::{CustomEvent, Document, ElementId};

/// Default name of the selection-changed event.
pub const SELECTION_CHANGED: &str = "selection-changed";

/// Payload of the selection-changed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Position of the new selection in the visible set.
    pub selected_index: usize,
    /// The newly selected tree item.
    pub selected_item: ElementId,
}

/// Specialization hook for tree controllers.
///
/// Implementors rename the emitted event or react to selection changes
/// (for example enabling controls that only make sense for some items)
/// without touching navigation.
///
/// # Example
///
/// ```
/// use ariadom::{Document, Element, ElementId};
/// use ariatree::{SelectionChange, TreeBehavior, TreeController};
///
/// struct FolderTree {
///     open_button: ElementId,
/// }
///
/// impl TreeBehavior for FolderTree {
///     fn event_name(&self) -> &str {
///         "folder-selected"
///     }
///
///     fn on_selection_changed(&mut self, change: &SelectionChange, doc: &mut Document) {
///         let is_folder = doc.is_label(change.selected_item);
///         if let Some(button) = doc.get_mut(self.open_button) {
///             button.disabled = !is_folder;
///         }
///     }
/// }
///
/// let doc = Document::mount(
///     Element::box_()
///         .child(Element::tree().child(Element::folder("src", vec![Element::item("main.rs")])))
///         .child(Element::button("Open").key("open").disabled(true)),
/// );
/// let open_button = doc.by_key("open").unwrap();
/// let tree = TreeController::builder(doc)
///     .behavior(FolderTree { open_button })
///     .build();
///
/// // The folder label starts out selected, so the button is enabled
/// assert!(!tree.document().get(open_button).unwrap().disabled);
/// ```
pub trait TreeBehavior {
    /// Name of the bubbling event dispatched on the tree root.
    fn event_name(&self) -> &str {
        SELECTION_CHANGED
    }

    /// Called after the event was dispatched.
    fn on_selection_changed(&mut self, _change: &SelectionChange, _doc: &mut Document) {}
}

/// Behavior with no side effects and the default event name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBehavior;

impl TreeBehavior for DefaultBehavior {}

/// Broadcast `change` from `root` and run the behavior hook.
pub(crate) fn notify<B: TreeBehavior>(
    doc: &mut Document,
    root: ElementId,
    behavior: &mut B,
    change: SelectionChange,
) {
    let event = CustomEvent::new(behavior.event_name(), root)
        .bubbles(true)
        .with_detail(change);
    let delivered = doc.dispatch(&event);
    log::debug!(
        "[tree] '{}' index={} item={} ({} listener(s))",
        event.name(),
        change.selected_index,
        change.selected_item,
        delivered
    );
    behavior.on_selection_changed(&change, doc);
}
