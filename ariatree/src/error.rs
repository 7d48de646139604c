use ariadom::{DocumentError, ElementId};
use thiserror::Error;

/// Errors from the programmatic tree API. Interaction paths never fail;
/// they degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The element is not a currently visible item of this tree.
    #[error("not a visible tree item: {0}")]
    NotVisible(ElementId),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
