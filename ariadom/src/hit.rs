use crate::document::Document;
use crate::element::ElementId;
use crate::layout::LayoutResult;

/// Find the deepest rendered element at the given coordinates.
/// Elements missing from `layout` or hidden by a closed group are skipped.
pub fn hit_test(layout: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<ElementId> {
    hit_test_element(layout, doc, doc.root(), x, y)
}

fn hit_test_element(
    layout: &LayoutResult,
    doc: &Document,
    id: ElementId,
    x: u16,
    y: u16,
) -> Option<ElementId> {
    let rect = layout.get(&id)?;

    if !rect.contains(x, y) || !doc.is_rendered(id) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for &child in doc.children(id).iter().rev() {
        if let Some(hit) = hit_test_element(layout, doc, child, x, y) {
            return Some(hit);
        }
    }

    Some(id)
}
