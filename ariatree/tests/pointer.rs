//! Pointer interaction tests.

mod common;

use ariadom::{Document, Element, Event, EventResult, Key, LayoutResult, MouseButton, Rect};
use ariatree::{SelectionChange, TreeConfig, TreeController};
use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};

use common::{
    assert_tree_invariants, click, flat, id, init_logger, nested, press, record, single_folder,
    visible_keys,
};

// ============================================================================
// Clicking items
// ============================================================================

#[test]
fn test_click_selects_item() {
    init_logger();
    let mut tree = TreeController::new(nested());
    let seen = record(&mut tree);

    assert_eq!(click(&mut tree, "readme"), EventResult::Handled);

    let readme = id(&tree, "readme");
    assert_eq!(tree.selected(), Some(readme));
    assert_eq!(tree.document().focused(), Some(readme));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![SelectionChange {
            selected_index: 1,
            selected_item: readme,
        }]
    );
}

#[test]
fn test_click_on_open_label_closes_subfolders() {
    init_logger();
    let mut tree = TreeController::new(nested());
    tree.select_node(id(&tree, "license")).unwrap();

    click(&mut tree, "docs-label");
    // Selection lands before the native toggle is projected
    assert_eq!(tree.selected_index(), Some(0));
    assert!(tree.has_pending());

    tree.tick();
    assert!(!tree.document().is_open(id(&tree, "docs")));
    assert!(!tree.document().is_open(id(&tree, "drafts")));
    assert_eq!(visible_keys(&tree), ["docs-label", "license"]);
    assert_eq!(tree.selected(), Some(id(&tree, "docs-label")));
    assert_tree_invariants(&tree);
}

#[test]
fn test_click_on_closed_label_keeps_subfolders() {
    let mut tree = TreeController::new(nested());
    let docs = id(&tree, "docs");
    tree.document_mut().set_open(docs, false).unwrap();
    tree.refresh();

    click(&mut tree, "docs-label");
    tree.tick();

    assert!(tree.document().is_open(docs));
    assert!(tree.document().is_open(id(&tree, "drafts")));
    assert_eq!(
        visible_keys(&tree),
        ["docs-label", "readme", "drafts-label", "todo", "license"]
    );
}

#[test]
fn test_close_subfolders_can_be_disabled() {
    let config = TreeConfig::new().close_subfolders(false);
    let mut tree = TreeController::builder(nested()).config(config).build();

    click(&mut tree, "docs-label");
    tree.tick();

    assert!(!tree.document().is_open(id(&tree, "docs")));
    assert!(tree.document().is_open(id(&tree, "drafts")));
    assert_eq!(visible_keys(&tree), ["docs-label", "license"]);
}

#[test]
fn test_click_on_plain_item_leaves_groups_alone() {
    let mut tree = TreeController::new(nested());
    click(&mut tree, "todo");
    tree.tick();

    assert!(tree.document().is_open(id(&tree, "docs")));
    assert!(tree.document().is_open(id(&tree, "drafts")));
    assert_eq!(tree.selected(), Some(id(&tree, "todo")));
}

#[test]
fn test_click_during_stale_set() {
    let mut tree = TreeController::new(single_folder());
    press(&mut tree, Key::Right);

    // Rendered but not projected yet: nothing to select
    assert_eq!(click(&mut tree, "item2"), EventResult::Handled);
    assert_eq!(tree.selected(), Some(id(&tree, "item1")));

    tree.tick();
    assert!(tree.document().is_open(id(&tree, "g1")));
    click(&mut tree, "item2");
    assert_eq!(tree.selected_index(), Some(1));
}

// ============================================================================
// Clicking elsewhere
// ============================================================================

#[test]
fn test_click_on_whitespace_restores_focus() {
    let mut tree = TreeController::new(nested());
    let readme = id(&tree, "readme");
    tree.select_node(readme).unwrap();
    tree.document_mut().blur();
    let seen = record(&mut tree);

    assert_eq!(click(&mut tree, "tree"), EventResult::Handled);
    assert_eq!(tree.document().focused(), Some(readme));
    assert_eq!(tree.selected(), Some(readme));
    assert!(seen.lock().unwrap().is_empty());
    assert!(!tree.has_pending());
}

#[test]
fn test_default_container_is_tree_root() {
    let tree = TreeController::new(nested());
    assert_eq!(tree.container(), id(&tree, "tree"));
    assert_eq!(tree.root(), Some(id(&tree, "tree")));
}

#[test]
fn test_click_on_control_outside_tree_keeps_focus() {
    let mut tree = TreeController::new(nested());
    let button = id(&tree, "open-button");
    tree.document_mut().focus(button);
    let seen = record(&mut tree);

    assert_eq!(click(&mut tree, "open-button"), EventResult::Ignored);
    assert_eq!(tree.document().focused(), Some(button));
    assert_eq!(tree.selected(), Some(id(&tree, "docs-label")));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_click_on_control_inside_container_keeps_focus() {
    let doc = nested();
    let container = doc.by_key("container").unwrap();
    let mut tree = TreeController::builder(doc).container(container).build();
    let button = id(&tree, "open-button");
    tree.document_mut().focus(button);

    assert_eq!(click(&mut tree, "open-button"), EventResult::Ignored);
    assert_eq!(tree.document().focused(), Some(button));

    // Plain chrome in the container still pulls focus back
    assert_eq!(click(&mut tree, "container"), EventResult::Handled);
    assert_eq!(tree.document().focused(), Some(id(&tree, "docs-label")));
}

#[test]
fn test_click_on_disabled_item_is_ignored() {
    let doc = Document::mount(
        Element::tree()
            .key("tree")
            .child(Element::item("A").key("a"))
            .child(Element::item("B").key("b").disabled(true)),
    );
    let mut tree = TreeController::new(doc);
    let a = id(&tree, "a");
    tree.set_selected(0);
    let seen = record(&mut tree);

    assert_eq!(click(&mut tree, "b"), EventResult::Ignored);
    assert_eq!(tree.selected(), Some(a));
    assert_eq!(tree.document().focused(), Some(a));
    assert!(seen.lock().unwrap().is_empty());
    assert!(!tree.has_pending());
}

#[test]
fn test_click_on_label_chrome_toggles_group() {
    let doc = Document::mount(
        Element::tree().key("tree").child(
            Element::group()
                .key("g")
                .child(
                    Element::item("folder")
                        .key("folder")
                        .child(Element::text("▶").key("arrow")),
                )
                .child(Element::item("file").key("file")),
        ),
    );
    let mut tree = TreeController::new(doc);
    assert_eq!(visible_keys(&tree), ["folder"]);

    assert_eq!(click(&mut tree, "arrow"), EventResult::Handled);
    assert_eq!(tree.document().focused(), Some(id(&tree, "folder")));

    tree.tick();
    assert_eq!(visible_keys(&tree), ["folder", "file"]);
}

#[test]
fn test_click_outside_container_is_ignored() {
    let doc = Document::mount(
        Element::box_()
            .child(
                Element::box_()
                    .key("left")
                    .child(Element::tree().child(Element::item("left").key("left-item"))),
            )
            .child(
                Element::box_().key("right").child(
                    Element::tree()
                        .child(Element::item("r1").key("r1"))
                        .child(Element::item("r2").key("r2")),
                ),
            ),
    );
    let right = doc.by_key("right").unwrap();
    let mut tree = TreeController::builder(doc).container(right).build();
    assert_eq!(visible_keys(&tree), ["r1", "r2"]);

    assert_eq!(click(&mut tree, "left-item"), EventResult::Ignored);
    assert_eq!(tree.selected(), Some(id(&tree, "r1")));
}

#[test]
fn test_non_primary_buttons_are_ignored() {
    let mut tree = TreeController::new(flat());
    let c = id(&tree, "c");

    for button in [MouseButton::Right, MouseButton::Middle] {
        let event = Event::Click {
            target: Some(c),
            button,
        };
        assert_eq!(tree.dispatch(&event), EventResult::Ignored);
    }
    assert_eq!(
        tree.dispatch(&Event::Click {
            target: None,
            button: MouseButton::Left,
        }),
        EventResult::Ignored
    );
    assert_eq!(tree.selected_index(), Some(0));
}

// ============================================================================
// Terminal input
// ============================================================================

#[test]
fn test_hit_tested_click_selects_item() {
    let mut tree = TreeController::new(flat());
    let mut layout = LayoutResult::new();
    layout.insert(id(&tree, "tree"), Rect::new(0, 0, 20, 3));
    layout.insert(id(&tree, "a"), Rect::new(2, 0, 10, 1));
    layout.insert(id(&tree, "b"), Rect::new(2, 1, 10, 1));
    layout.insert(id(&tree, "c"), Rect::new(2, 2, 10, 1));

    let raw = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: 4,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    for event in tree.document_mut().process_events(&[raw], &layout) {
        tree.dispatch(&event);
    }

    assert_eq!(tree.selected(), Some(id(&tree, "c")));
}
