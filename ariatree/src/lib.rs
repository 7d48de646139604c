//! Accessible single-selection tree over an [`ariadom`] document.
//!
//! [`TreeController`] keeps one selected item, a projection of the items not
//! hidden by a closed group, and the roving tab stop, and turns keyboard and
//! pointer events into selection and expand/collapse operations.

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod notify;
pub mod scan;
pub mod schedule;
pub mod selection;

pub use config::TreeConfig;
pub use controller::{TreeController, TreeControllerBuilder};
pub use error::TreeError;
pub use notify::{DefaultBehavior, SelectionChange, TreeBehavior, SELECTION_CHANGED};
pub use scan::{Scanner, VisibleSet};

pub mod prelude {
    pub use crate::config::TreeConfig;
    pub use crate::controller::TreeController;
    pub use crate::error::TreeError;
    pub use crate::notify::{SelectionChange, TreeBehavior, SELECTION_CHANGED};
    pub use crate::scan::VisibleSet;

    pub use ariadom::{Document, Element, ElementId, Event, EventResult, Key, Modifiers, Role};
}
