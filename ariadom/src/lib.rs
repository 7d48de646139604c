pub mod aria;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;

pub use aria::{attribute, attributes, Attribute};
pub use document::{Ancestors, Document, Listener, ListenerId, Node};
pub use element::{Element, ElementId, Role};
pub use error::DocumentError;
pub use event::{CustomEvent, Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
