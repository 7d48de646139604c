//! Shared fixtures for the tree controller tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ariadom::{Document, Element, ElementId, Event, EventResult, Key};
use ariatree::{SelectionChange, TreeBehavior, TreeController};
use simplelog::{Config, LevelFilter, TestLogger};

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// tree › [a, b, c]
pub fn flat() -> Document {
    Document::mount(
        Element::tree()
            .key("tree")
            .child(Element::item("A").key("a"))
            .child(Element::item("B").key("b"))
            .child(Element::item("C").key("c")),
    )
}

/// tree › group g1 (closed) › [item1 (label), item2]
pub fn single_folder() -> Document {
    Document::mount(
        Element::tree().key("tree").child(
            Element::group()
                .key("g1")
                .child(Element::item("item1").key("item1"))
                .child(Element::item("item2").key("item2")),
        ),
    )
}

/// container › [tree › [docs (open) › [docs-label, readme, drafts (open) ›
/// [drafts-label, todo]], license], open-button]
pub fn nested() -> Document {
    Document::mount(
        Element::box_()
            .key("container")
            .child(
                Element::tree()
                    .key("tree")
                    .child(
                        Element::group()
                            .key("docs")
                            .open(true)
                            .child(Element::item("Docs").key("docs-label"))
                            .child(Element::item("readme.md").key("readme"))
                            .child(
                                Element::group()
                                    .key("drafts")
                                    .open(true)
                                    .child(Element::item("Drafts").key("drafts-label"))
                                    .child(Element::item("todo.md").key("todo")),
                            ),
                    )
                    .child(Element::item("LICENSE").key("license")),
            )
            .child(Element::button("Open").key("open-button")),
    )
}

pub fn id<B: TreeBehavior>(tree: &TreeController<B>, key: &str) -> ElementId {
    tree.document()
        .by_key(key)
        .unwrap_or_else(|| panic!("no element keyed {key:?}"))
}

pub fn visible_keys<B: TreeBehavior>(tree: &TreeController<B>) -> Vec<String> {
    tree.visible()
        .iter()
        .map(|item| {
            tree.document()
                .get(item)
                .and_then(|n| n.key.clone())
                .unwrap_or_default()
        })
        .collect()
}

/// Press `key` on the selected item, which is where keyboard focus sits.
pub fn press<B: TreeBehavior>(tree: &mut TreeController<B>, key: Key) -> EventResult {
    let target = tree.selected();
    tree.dispatch(&Event::key(target, key))
}

pub fn click<B: TreeBehavior>(tree: &mut TreeController<B>, key: &str) -> EventResult {
    let target = id(tree, key);
    tree.dispatch(&Event::click(target))
}

/// Collect every selection change delivered to a subscriber.
pub fn record<B: TreeBehavior>(tree: &mut TreeController<B>) -> Arc<Mutex<Vec<SelectionChange>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    tree.subscribe(move |change| sink.lock().unwrap().push(*change))
        .expect("tree root to subscribe on");
    seen
}

/// Visible items are all rendered, exactly one of them is selected and it
/// is the only tab stop.
pub fn assert_tree_invariants<B: TreeBehavior>(tree: &TreeController<B>) {
    let doc = tree.document();
    for item in tree.visible().iter() {
        assert!(doc.is_rendered(item), "{item} is in the visible set but hidden");
    }

    let selected: Vec<ElementId> = tree
        .visible()
        .iter()
        .filter(|&item| doc.get(item).is_some_and(|n| n.selected))
        .collect();
    let stops: Vec<ElementId> = tree
        .visible()
        .iter()
        .filter(|&item| doc.get(item).is_some_and(|n| n.tab_index == Some(0)))
        .collect();

    if tree.visible().is_empty() {
        assert!(selected.is_empty());
    } else {
        assert_eq!(selected, tree.selected().into_iter().collect::<Vec<_>>());
    }
    assert_eq!(stops, selected);
}
