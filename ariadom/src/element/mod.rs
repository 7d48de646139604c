mod node;

pub use node::Element;

/// Handle to a mounted element. Ids are stable for the document's lifetime
/// and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Semantic role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Anything without tree semantics: containers, chrome, controls.
    #[default]
    Generic,
    /// Root of a tree hierarchy.
    Tree,
    /// Collapsible container with an open flag.
    Group,
    /// Selectable tree entry.
    TreeItem,
}

impl Role {
    /// Name as exposed in the `role` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Generic => "generic",
            Role::Tree => "tree",
            Role::Group => "group",
            Role::TreeItem => "treeitem",
        }
    }

    /// Whether elements with this role may hold the given child role.
    /// Tree items only ever contain chrome.
    pub fn accepts(self, child: Role) -> bool {
        match self {
            Role::TreeItem => child == Role::Generic,
            _ => true,
        }
    }
}
