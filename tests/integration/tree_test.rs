//! Integration tests for tree mutations and queries.

use pretty_assertions::assert_eq;

use studio_core::error::ErrorKind;
use studio_core::events::ItemEvent;
use studio_core::types::{ChildOrder, SortKey};
use studio_service::{ItemTreeManager, MoveDestinationPicker, MoveOutcome, TreeSettings};

use crate::helpers::{TestTree, child_names};

#[test]
fn test_folders_created_through_manager() {
    let mut manager = ItemTreeManager::new(TreeSettings::default());

    let a = manager.create_folder(None).unwrap();
    let b = manager.create_folder(None).unwrap();
    let c = manager.create_folder(Some(a.id)).unwrap();
    manager.rename(&a.id, "A").unwrap();
    manager.rename(&b.id, "B").unwrap();
    manager.rename(&c.id, "C").unwrap();

    let err = manager.move_item(&a.id, Some(c.id)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalMove);

    let outcome = manager.move_item(&c.id, Some(b.id)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Some(a.id),
            to: Some(b.id)
        }
    );
    assert_eq!(child_names(&manager, Some(b.id)), ["C"]);
    assert!(child_names(&manager, Some(a.id)).is_empty());
}

#[test]
fn test_cascade_delete_keeps_unrelated_items() {
    let tree = TestTree::new()
        .folder("A", None)
        .folder("C", Some("A"))
        .file("D", None);
    let mut manager = tree.manager();

    let removed = manager.delete(&tree.id("A")).unwrap();
    assert_eq!(removed, vec![tree.id("A"), tree.id("C")]);
    assert!(!manager.contains(&tree.id("C")));
    assert_eq!(child_names(&manager, None), ["D"]);
}

#[test]
fn test_deep_cascade_delete() {
    let tree = TestTree::new()
        .folder("A", None)
        .folder("B", Some("A"))
        .folder("C", Some("B"))
        .file("img", Some("C"))
        .file("top", Some("A"))
        .folder("Other", None);
    let mut manager = tree.manager();

    let removed = manager.delete(&tree.id("A")).unwrap();
    assert_eq!(removed.len(), 5);
    assert_eq!(manager.len(), 1);
    assert!(manager.contains(&tree.id("Other")));
}

#[test]
fn test_file_moves_anywhere_but_into_files() {
    let tree = TestTree::new()
        .folder("A", None)
        .folder("B", Some("A"))
        .file("img", Some("B"))
        .file("other", None);
    let mut manager = tree.manager();

    manager.move_item(&tree.id("img"), None).unwrap();
    assert_eq!(manager.get(&tree.id("img")).unwrap().parent_id, None);

    let err = manager
        .move_item(&tree.id("img"), Some(tree.id("other")))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    assert_eq!(
        manager.move_item(&tree.id("img"), None).unwrap(),
        MoveOutcome::Unchanged
    );
}

#[test]
fn test_picker_matches_move_validation() {
    let tree = TestTree::new()
        .folder("A", None)
        .folder("B", Some("A"))
        .folder("C", Some("B"))
        .folder("X", None)
        .folder("Y", Some("X"));
    let manager = tree.manager();
    let picker = MoveDestinationPicker::new(&manager, "All Projects");

    let moving = tree.id("B");
    let destinations = picker.destinations_for(&moving).unwrap();

    for folder in manager.folders() {
        let listed = destinations
            .entries
            .iter()
            .any(|entry| entry.target == Some(folder.id));
        let legal = manager.clone().move_item(&moving, Some(folder.id)).is_ok();
        assert_eq!(listed, legal, "folder {}", folder.name);
    }

    let labels: Vec<&str> = destinations
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(labels, ["All Projects", "A", "X", "Y"]);
    assert!(destinations.entries[1].is_current);
}

#[test]
fn test_queries_after_moves() {
    let tree = TestTree::new()
        .folder("A", None)
        .folder("B", Some("A"))
        .folder("C", None);
    let mut manager = tree.manager();

    manager.move_item(&tree.id("C"), Some(tree.id("B"))).unwrap();

    assert_eq!(
        manager.path_to(&tree.id("C")).unwrap(),
        vec![tree.id("A"), tree.id("B"), tree.id("C")]
    );
    assert_eq!(manager.depth(&tree.id("C")).unwrap(), 2);
    assert!(manager.is_descendant_of(&tree.id("C"), &tree.id("A")));
    assert!(!manager.is_descendant_of(&tree.id("A"), &tree.id("C")));

    let built = manager.build_tree(ChildOrder::asc(SortKey::Name));
    assert_eq!(built.total_items, 3);
    assert_eq!(built.roots.len(), 1);
    assert_eq!(built.roots[0].children[0].children[0].name, "C");
}

#[test]
fn test_events_record_every_mutation() {
    let tree = TestTree::new().folder("A", None).file("img", None);
    let mut manager = tree.manager();

    let folder = manager.create_folder(Some(tree.id("A"))).unwrap();
    manager.rename(&folder.id, "Inner").unwrap();
    manager.move_item(&tree.id("img"), Some(folder.id)).unwrap();
    manager.delete(&tree.id("A")).unwrap();

    let events = manager.drain_events();
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0].payload, ItemEvent::Created { .. }));
    assert!(matches!(events[1].payload, ItemEvent::Renamed { .. }));
    assert!(matches!(events[2].payload, ItemEvent::Moved { .. }));
    match &events[3].payload {
        ItemEvent::Deleted { item_id, removed } => {
            assert_eq!(*item_id, tree.id("A"));
            assert_eq!(removed.len(), 3);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(manager.drain_events().is_empty());
}
