use thiserror::Error;

use crate::element::{ElementId, Role};

/// Errors returned by structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The id does not belong to this document.
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),

    /// The parent's role cannot hold a child of the given role.
    #[error("{parent} ({parent_role:?}) cannot contain a {child_role:?} element")]
    InvalidParent {
        parent: ElementId,
        parent_role: Role,
        child_role: Role,
    },

    /// Open/closed state was requested on something that is not a group.
    #[error("element is not a group: {0}")]
    NotAGroup(ElementId),
}
