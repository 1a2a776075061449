//! Integration tests for the explorer session protocol.

use pretty_assertions::assert_eq;

use studio_core::error::ErrorKind;
use studio_service::MoveOutcome;

use crate::helpers::{TestTree, child_names};

fn scenario() -> TestTree {
    TestTree::new()
        .folder("A", None)
        .folder("B", None)
        .folder("C", Some("A"))
        .file("D", None)
}

#[test]
fn test_create_then_rename_new_folder() {
    let tree = scenario();
    let mut session = tree.session();
    session.enter(tree.id("A")).unwrap();

    let folder = session.create_folder().unwrap();
    assert_eq!(folder.name, "New Folder");
    assert_eq!(folder.parent_id, Some(tree.id("A")));
    assert_eq!(session.pending_rename().unwrap().item_id, folder.id);

    session.set_draft("   ").unwrap();
    let err = session.commit_rename().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(session.pending_rename().is_some());

    session.set_draft("  Sketches ").unwrap();
    let renamed = session.commit_rename().unwrap().unwrap();
    assert_eq!(renamed.name, "Sketches");
    assert!(session.pending_rename().is_none());

    let names: Vec<&str> = session
        .current_children()
        .into_iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["C", "Sketches"]);
}

#[test]
fn test_move_keeps_pending_after_illegal_target() {
    let tree = scenario();
    let mut session = tree.session();

    let destinations = session.begin_move(tree.id("A")).unwrap();
    assert!(!destinations.allows(Some(tree.id("C"))));

    let err = session.commit_move(Some(tree.id("C"))).unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalMove);
    assert_eq!(session.pending_move(), Some(tree.id("A")));

    let outcome = session.commit_move(Some(tree.id("B"))).unwrap();
    assert!(matches!(outcome, MoveOutcome::Moved { .. }));
    assert!(session.pending_move().is_none());
    assert_eq!(child_names(session.manager(), Some(tree.id("B"))), ["A"]);
}

#[test]
fn test_move_of_open_folder_updates_breadcrumbs() {
    let tree = scenario();
    let mut session = tree.session();
    session.enter(tree.id("A")).unwrap();
    session.enter(tree.id("C")).unwrap();

    session.begin_move(tree.id("A")).unwrap();
    session.commit_move(Some(tree.id("B"))).unwrap();

    let labels: Vec<String> = session
        .breadcrumbs()
        .into_iter()
        .map(|crumb| crumb.label)
        .collect();
    assert_eq!(labels, ["All Projects", "B", "A", "C"]);
}

#[test]
fn test_declined_delete_changes_nothing() {
    let tree = scenario();
    let mut session = tree.session();

    let pending = session.request_delete(tree.id("A")).unwrap();
    assert_eq!(pending.descendant_count, 1);

    let err = session.resolve_delete(false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UserCancelled);
    assert!(session.pending_delete().is_none());
    assert_eq!(session.manager().len(), 4);
}

#[test]
fn test_confirmed_delete_of_open_folder() {
    let tree = scenario();
    let mut session = tree.session();
    session.enter(tree.id("A")).unwrap();
    session.enter(tree.id("C")).unwrap();
    session.begin_rename(tree.id("C")).unwrap();

    session.request_delete(tree.id("A")).unwrap();
    let removed = session.resolve_delete(true).unwrap();

    assert_eq!(removed, vec![tree.id("A"), tree.id("C")]);
    assert!(session.browser().is_at_root());
    assert!(session.pending_rename().is_none());
    assert_eq!(child_names(session.manager(), None), ["B", "D"]);
}

#[test]
fn test_navigation_rejects_files_and_strangers() {
    let tree = scenario();
    let mut session = tree.session();

    assert_eq!(
        session.enter(tree.id("D")).unwrap_err().kind,
        ErrorKind::Validation
    );
    assert_eq!(
        session.enter(tree.id("C")).unwrap_err().kind,
        ErrorKind::Validation
    );

    session.enter(tree.id("A")).unwrap();
    session.enter(tree.id("C")).unwrap();
    session.jump_to(0).unwrap();
    assert_eq!(session.current_folder(), Some(tree.id("A")));
    session.up();
    assert!(session.browser().is_at_root());
    session.up();
    assert!(session.browser().is_at_root());
}
