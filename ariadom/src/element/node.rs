use super::Role;

/// Declarative description of an element subtree, mounted into a
/// [`Document`](crate::Document) which assigns ids and parent links.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    /// Optional host-chosen key for looking the element up after mounting.
    pub key: Option<String>,
    pub role: Role,

    // Content
    pub label: String,
    pub children: Vec<Element>,

    // Disclosure
    /// Open flag, only meaningful for [`Role::Group`].
    pub open: bool,

    // State
    /// Pre-marked selection, picked up by tree controllers at construction.
    pub selected: bool,
    /// Natively focusable (buttons, tree item labels).
    pub focusable: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            key: None,
            role: Role::Generic,
            label: String::new(),
            children: Vec::new(),
            open: false,
            selected: false,
            focusable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self::default()
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focusable: true,
            ..Default::default()
        }
    }

    /// Root of a tree hierarchy.
    pub fn tree() -> Self {
        Self {
            role: Role::Tree,
            ..Default::default()
        }
    }

    /// A collapsible container. Its first tree item child becomes its label.
    pub fn group() -> Self {
        Self {
            role: Role::Group,
            ..Default::default()
        }
    }

    /// A selectable tree entry. Natively focusable, like a disclosure summary.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            role: Role::TreeItem,
            label: label.into(),
            focusable: true,
            ..Default::default()
        }
    }

    /// Shorthand for a group labelled by `label` holding `children`.
    pub fn folder(label: impl Into<String>, children: Vec<Element>) -> Self {
        let label = label.into();
        Self::group()
            .child(Self::item(label.clone()).key(label))
            .children(children)
    }

    // Identity
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Content
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Disclosure
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    // State
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
