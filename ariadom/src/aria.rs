//! Projection of typed element state onto accessibility attributes.
//!
//! State lives in [`Node`](crate::Node) fields; attributes are an output,
//! computed on demand for whatever exposes them (a screen reader bridge,
//! a snapshot test, a debug dump).

use crate::document::Document;
use crate::element::{ElementId, Role};

/// A single name/value attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

impl Attribute {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Attributes for `id`, in a stable order. Empty for unknown ids.
pub fn attributes(doc: &Document, id: ElementId) -> Vec<Attribute> {
    let Some(node) = doc.get(id) else {
        return Vec::new();
    };

    let mut attrs = Vec::new();
    if node.role != Role::Generic {
        attrs.push(Attribute::new("role", node.role.as_str()));
    }
    if let Some(tab_index) = node.tab_index {
        attrs.push(Attribute::new("tabindex", tab_index));
    }

    match node.role {
        Role::TreeItem => {
            attrs.push(Attribute::new("aria-selected", node.selected));
            if doc.is_label(id) {
                let group = doc.parent(id).map(|g| doc.is_open(g)).unwrap_or(false);
                attrs.push(Attribute::new("aria-expanded", group));
            }
            attrs.push(Attribute::new("aria-level", doc.level(id)));
        }
        Role::Group if node.open => attrs.push(Attribute::new("open", "")),
        _ => {}
    }

    if node.disabled {
        attrs.push(Attribute::new("aria-disabled", true));
    }
    attrs
}

/// Value of a single attribute, if present.
pub fn attribute(doc: &Document, id: ElementId, name: &str) -> Option<String> {
    attributes(doc, id)
        .into_iter()
        .find(|a| a.name == name)
        .map(|a| a.value)
}
