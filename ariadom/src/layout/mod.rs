//! Screen geometry supplied by the host renderer.
//!
//! Layout itself is the host's business; the document only consumes the
//! resulting rectangles for hit testing.

mod rect;

use std::collections::HashMap;

use crate::element::ElementId;

pub use rect::Rect;

/// Element rectangles as laid out by the host.
pub type LayoutResult = HashMap<ElementId, Rect>;
